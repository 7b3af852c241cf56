// thaiid-rs/thaiid/src/protocol/catalog.rs
//! Fixed command table for the Thai ID applet.
//!
//! Every field is read with a proprietary READ BINARY of the form
//! `80 B0 P1 P2 02 00 LEN`, where P1 P2 is the file offset and LEN the
//! number of bytes expected. These bytes must stay exactly as they are to
//! talk to real cards.

use derive_more::Display;

use crate::constants::{
    INS_READ_BINARY, PHOTO_CHUNK_LEN, PHOTO_FIRST_OFFSET, THAI_ID_AID, THAI_ID_CLA,
};
use crate::protocol::apdu::ApduCommand;
use crate::{Error, Result};

/// SELECT for the Thai ID applet.
pub const SELECT_APPLET: ApduCommand = ApduCommand::select(&THAI_ID_AID);

const fn read_binary(p1: u8, p2: u8, data: &'static [u8]) -> ApduCommand {
    ApduCommand::new(THAI_ID_CLA, INS_READ_BINARY, p1, p2).with_data(data)
}

const CITIZEN_ID: ApduCommand = read_binary(0x00, 0x04, &[0x00, 0x0D]);
const NAME_TH: ApduCommand = read_binary(0x00, 0x11, &[0x00, 0x64]);
const NAME_EN: ApduCommand = read_binary(0x00, 0x75, &[0x00, 0x64]);
const BIRTH_DATE: ApduCommand = read_binary(0x00, 0xD9, &[0x00, 0x08]);
const GENDER: ApduCommand = read_binary(0x00, 0xE1, &[0x00, 0x01]);
const ISSUER: ApduCommand = read_binary(0x00, 0xF6, &[0x00, 0x64]);
const ISSUE_DATE: ApduCommand = read_binary(0x01, 0x67, &[0x00, 0x08]);
const EXPIRE_DATE: ApduCommand = read_binary(0x01, 0x6F, &[0x00, 0x08]);
const ADDRESS: ApduCommand = read_binary(0x15, 0x79, &[0x00, 0x64]);
const REQUEST_NUMBER: ApduCommand = read_binary(0x16, 0x19, &[0x00, 0x0E]);

/// Text fields stored on the card.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// 13-digit citizen identification number
    #[display(fmt = "citizen_id")]
    CitizenId,
    /// Full name in Thai
    #[display(fmt = "name_th")]
    NameTh,
    /// Full name in English
    #[display(fmt = "name_en")]
    NameEn,
    /// Date of birth, Buddhist Era
    #[display(fmt = "birth_date")]
    BirthDate,
    /// Gender code
    #[display(fmt = "gender")]
    Gender,
    /// Card issue date
    #[display(fmt = "issue_date")]
    IssueDate,
    /// Card expiry date
    #[display(fmt = "expire_date")]
    ExpireDate,
    /// Issuing office
    #[display(fmt = "issuer")]
    Issuer,
    /// Registered address
    #[display(fmt = "address")]
    Address,
    /// Card request number
    #[display(fmt = "request_number")]
    RequestNumber,
}

impl Field {
    /// Read order used by the reader. Citizen ID always comes first.
    pub const ALL: [Field; 10] = [
        Field::CitizenId,
        Field::NameTh,
        Field::NameEn,
        Field::BirthDate,
        Field::Gender,
        Field::IssueDate,
        Field::ExpireDate,
        Field::Issuer,
        Field::Address,
        Field::RequestNumber,
    ];

    /// READ BINARY command for this field.
    pub const fn command(self) -> ApduCommand {
        match self {
            Field::CitizenId => CITIZEN_ID,
            Field::NameTh => NAME_TH,
            Field::NameEn => NAME_EN,
            Field::BirthDate => BIRTH_DATE,
            Field::Gender => GENDER,
            Field::Issuer => ISSUER,
            Field::IssueDate => ISSUE_DATE,
            Field::ExpireDate => EXPIRE_DATE,
            Field::Address => ADDRESS,
            Field::RequestNumber => REQUEST_NUMBER,
        }
    }

    /// Number of bytes the card returns for this field.
    pub fn expected_len(self) -> usize {
        self.command().data.get(1).copied().unwrap_or(0) as usize
    }
}

/// READ BINARY for photo chunk `index` (0-based).
///
/// The offset walks P1 up and P2 down by one per chunk, starting at 01 7B.
/// Only indices below `PHOTO_CHUNK_LIMIT` address the photo area.
pub fn photo_chunk_command(index: u8) -> ApduCommand {
    let (p1, p2) = PHOTO_FIRST_OFFSET;
    read_binary(
        p1.wrapping_add(index),
        p2.wrapping_sub(index),
        &[0x00, PHOTO_CHUNK_LEN],
    )
}

/// Check the table is well formed: every entry is an applet READ BINARY
/// with a non-zero length and no two fields share an offset.
pub fn validate() -> Result<()> {
    let mut offsets = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let cmd = field.command();
        if cmd.cla != THAI_ID_CLA || cmd.ins != INS_READ_BINARY {
            return Err(Error::InvalidCatalog(format!(
                "{field}: not a READ BINARY ({:02X} {:02X})",
                cmd.cla, cmd.ins
            )));
        }
        if cmd.data.len() != 2 || cmd.data[0] != 0x00 || cmd.data[1] == 0 {
            return Err(Error::InvalidCatalog(format!(
                "{field}: malformed length block"
            )));
        }
        let offset = (cmd.p1, cmd.p2);
        if offsets.contains(&offset) {
            return Err(Error::InvalidCatalog(format!(
                "{field}: offset {:02X}{:02X} already used",
                cmd.p1, cmd.p2
            )));
        }
        offsets.push(offset);
    }
    Ok(())
}
