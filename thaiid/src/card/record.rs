// thaiid-rs/thaiid/src/card/record.rs

use crate::decode::{CardDate, Gender};
use crate::types::Photo;

/// Personal record read from a Thai national ID card.
///
/// Built once per successful read and never mutated afterwards. Strings
/// are already decoded and whitespace-normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentityRecord {
    pub(crate) citizen_id: String,
    pub(crate) name_th: String,
    pub(crate) name_en: String,
    pub(crate) gender: Gender,
    pub(crate) birth_date: CardDate,
    pub(crate) issue_date: CardDate,
    pub(crate) expire_date: CardDate,
    pub(crate) issuer: String,
    pub(crate) address: String,
    pub(crate) request_number: String,
    pub(crate) photo: Option<Photo>,
}

impl IdentityRecord {
    /// 13-digit citizen ID, unmasked.
    pub fn citizen_id(&self) -> &str {
        &self.citizen_id
    }
    /// Thai full name.
    pub fn name_th(&self) -> &str {
        &self.name_th
    }
    /// English full name.
    pub fn name_en(&self) -> &str {
        &self.name_en
    }
    /// Gender.
    pub fn gender(&self) -> &Gender {
        &self.gender
    }
    /// Date of birth.
    pub fn birth_date(&self) -> CardDate {
        self.birth_date
    }
    /// Card issue date.
    pub fn issue_date(&self) -> CardDate {
        self.issue_date
    }
    /// Card expiry date; may be `Lifelong`.
    pub fn expire_date(&self) -> CardDate {
        self.expire_date
    }
    /// Issuing office.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }
    /// Registered address.
    pub fn address(&self) -> &str {
        &self.address
    }
    /// Card request number.
    pub fn request_number(&self) -> &str {
        &self.request_number
    }
    /// Card photo, `None` when missing or too short.
    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    /// Citizen ID with all but the last four digits hidden, for logs.
    pub fn masked_citizen_id(&self) -> String {
        crate::utils::mask_citizen_id(&self.citizen_id)
    }
}
