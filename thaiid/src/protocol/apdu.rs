// thaiid-rs/thaiid/src/protocol/apdu.rs

use crate::constants::{GET_RESPONSE_HEADER, SELECT_BY_NAME_HEADER};
use crate::protocol::parser;
use crate::types::StatusWord;
use crate::Result;

/// Command APDU. Immutable once built; catalog entries are `const` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApduCommand {
    /// Class byte
    pub cla: u8,
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    /// Command data; Lc is emitted only when this is non-empty.
    pub data: &'static [u8],
    /// Expected response length, emitted after the data when present.
    pub le: Option<u8>,
}

impl ApduCommand {
    /// Header-only command.
    pub const fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: &[],
            le: None,
        }
    }

    /// Attach command data.
    pub const fn with_data(mut self, data: &'static [u8]) -> Self {
        self.data = data;
        self
    }

    /// Set the expected response length.
    pub const fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// SELECT by DF name for the given application identifier.
    pub const fn select(aid: &'static [u8]) -> Self {
        let [cla, ins, p1, p2] = SELECT_BY_NAME_HEADER;
        Self::new(cla, ins, p1, p2).with_data(aid)
    }

    /// GET RESPONSE for `len` pending bytes.
    pub const fn get_response(len: u8) -> Self {
        let [cla, ins, p1, p2] = GET_RESPONSE_HEADER;
        Self::new(cla, ins, p1, p2).with_le(len)
    }

    /// Encode the command into its wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(6 + self.data.len());
        out.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);
        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(self.data);
        }
        if let Some(le) = self.le {
            out.push(le);
        }
        out
    }
}

/// Response APDU: payload plus trailing status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    /// Response data without the status word
    pub payload: Vec<u8>,
    /// Trailing SW1 SW2
    pub status: StatusWord,
}

impl ApduResponse {
    /// Response from its parts.
    pub fn new(payload: Vec<u8>, sw1: u8, sw2: u8) -> Self {
        Self {
            payload,
            status: StatusWord::new(sw1, sw2),
        }
    }

    /// Split raw reader output into payload and the trailing SW1 SW2.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        parser::ensure_len(raw, 2)?;
        let split = raw.len() - 2;
        let sw1 = parser::byte_at(raw, split)?;
        let sw2 = parser::byte_at(raw, split + 1)?;
        Ok(Self::new(raw[..split].to_vec(), sw1, sw2))
    }

    /// SW1.
    pub fn sw1(&self) -> u8 {
        self.status.sw1
    }

    /// SW2.
    pub fn sw2(&self) -> u8 {
        self.status.sw2
    }

    /// Whether the card answered `90 00`.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
