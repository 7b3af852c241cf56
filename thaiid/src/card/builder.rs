// thaiid-rs/thaiid/src/card/builder.rs

use crate::card::IdentityRecord;
use crate::decode::{CardDate, Gender, decode_text};
use crate::protocol::Field;
use crate::types::Photo;
use crate::{Error, Result};

/// Accumulates decoded fields during a read.
///
/// Each field is decoded as soon as its bytes arrive and independently of
/// every other field. Fields never set fall back to empty text or
/// `CardDate::Unspecified`.
#[derive(Debug, Default)]
pub struct IdentityRecordBuilder {
    citizen_id: Option<String>,
    name_th: Option<String>,
    name_en: Option<String>,
    gender: Option<Gender>,
    birth_date: Option<CardDate>,
    issue_date: Option<CardDate>,
    expire_date: Option<CardDate>,
    issuer: Option<String>,
    address: Option<String>,
    request_number: Option<String>,
    photo: Option<Photo>,
}

impl IdentityRecordBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode raw field bytes into the matching slot.
    pub fn field(mut self, field: Field, raw: &[u8]) -> Self {
        let text = decode_text(raw);
        match field {
            Field::CitizenId => self.citizen_id = Some(text),
            Field::NameTh => self.name_th = Some(text),
            Field::NameEn => self.name_en = Some(text),
            Field::BirthDate => self.birth_date = Some(CardDate::parse(&text)),
            Field::Gender => self.gender = Some(Gender::from_code(&text)),
            Field::IssueDate => self.issue_date = Some(CardDate::parse(&text)),
            Field::ExpireDate => self.expire_date = Some(CardDate::parse(&text)),
            Field::Issuer => self.issuer = Some(text),
            Field::Address => self.address = Some(text),
            Field::RequestNumber => self.request_number = Some(text),
        }
        self
    }

    /// Attach the assembled photo.
    pub fn photo(mut self, photo: Option<Photo>) -> Self {
        self.photo = photo;
        self
    }

    /// Finish the record. A read that produced no citizen ID is not a
    /// record.
    pub fn build(self) -> Result<IdentityRecord> {
        let citizen_id = self.citizen_id.unwrap_or_default();
        if citizen_id.is_empty() {
            return Err(Error::ReadError {
                field: Field::CitizenId,
                source: Box::new(Error::InvalidLength {
                    expected: Field::CitizenId.expected_len(),
                    actual: 0,
                }),
            });
        }

        Ok(IdentityRecord {
            citizen_id,
            name_th: self.name_th.unwrap_or_default(),
            name_en: self.name_en.unwrap_or_default(),
            gender: self.gender.unwrap_or_else(|| Gender::Other(String::new())),
            birth_date: self.birth_date.unwrap_or(CardDate::Unspecified),
            issue_date: self.issue_date.unwrap_or(CardDate::Unspecified),
            expire_date: self.expire_date.unwrap_or(CardDate::Unspecified),
            issuer: self.issuer.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            request_number: self.request_number.unwrap_or_default(),
            photo: self.photo,
        })
    }
}
