// thaiid-rs/thaiid/src/verify.rs
//! Face verification boundary
//!
//! The crate does not compare faces itself. A `FaceVerifier` collaborator
//! compares the card photo with a live capture, and the verdict travels with
//! the record as a `VerifiedRecord` to whatever persists it.

use derive_more::Display;

use crate::card::IdentityRecord;
use crate::{Error, Result};

/// Verdict from a face comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceMatch {
    /// Whether the verifier judged the faces to be the same person
    pub matched: bool,
    /// Embedding distance, lower is closer
    pub distance: f32,
}

impl FaceMatch {
    /// Similarity shown to the operator: `(1 - distance) * 100`, floored at 0.
    pub fn similarity_percent(&self) -> f32 {
        ((1.0 - self.distance) * 100.0).max(0.0)
    }

    /// Status to persist for this verdict.
    pub fn status(&self) -> FaceStatus {
        if self.matched {
            FaceStatus::Matched
        } else {
            FaceStatus::Mismatched
        }
    }
}

/// Persisted verification status. The numeric codes are stored as-is.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FaceStatus {
    /// No comparison ran
    #[default]
    #[display(fmt = "not checked")]
    NotChecked = 0,
    /// Same person
    #[display(fmt = "matched")]
    Matched = 1,
    /// Different person
    #[display(fmt = "mismatched")]
    Mismatched = 2,
}

impl FaceStatus {
    /// Stored numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`FaceStatus::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::NotChecked),
            1 => Some(Self::Matched),
            2 => Some(Self::Mismatched),
            _ => None,
        }
    }

    /// Thai label shown to the operator.
    pub fn th(self) -> &'static str {
        match self {
            Self::NotChecked => "รอการตรวจสอบ",
            Self::Matched => "ตรงกับบัตรประชาชน",
            Self::Mismatched => "ไม่ตรงกับบัตรประชาชน",
        }
    }
}

/// Compares a reference face image with a live capture.
pub trait FaceVerifier {
    /// Compare `candidate` against `reference` (the card photo).
    ///
    /// Failures are reported as `Error::Verification`.
    fn verify(&self, reference: &[u8], candidate: &[u8]) -> Result<FaceMatch>;
}

impl<F> FaceVerifier for F
where
    F: Fn(&[u8], &[u8]) -> Result<FaceMatch>,
{
    fn verify(&self, reference: &[u8], candidate: &[u8]) -> Result<FaceMatch> {
        self(reference, candidate)
    }
}

/// Record plus verification result, handed to persistence as one value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerifiedRecord {
    /// Record as read from the card
    pub record: IdentityRecord,
    /// Image compared with the card photo
    pub live_image: Option<Vec<u8>>,
    /// Verdict, `None` when no comparison ran
    pub face_match: Option<FaceMatch>,
}

impl VerifiedRecord {
    /// Record that has not been through face verification.
    pub fn unchecked(record: IdentityRecord) -> Self {
        Self {
            record,
            live_image: None,
            face_match: None,
        }
    }

    /// Status to persist; `NotChecked` without a verdict.
    pub fn status(&self) -> FaceStatus {
        self.face_match
            .map(|m| m.status())
            .unwrap_or(FaceStatus::NotChecked)
    }
}

/// Compare the card photo with `candidate`.
///
/// Fails with `Verification` when the record carries no photo or the
/// verifier fails; the reader is never involved.
pub fn verify_record<V: FaceVerifier + ?Sized>(
    verifier: &V,
    record: IdentityRecord,
    candidate: Vec<u8>,
) -> Result<VerifiedRecord> {
    let Some(photo) = record.photo() else {
        return Err(Error::Verification("card has no photo".into()));
    };
    let face_match = verifier.verify(photo.as_bytes(), &candidate).map_err(|e| match e {
        Error::Verification(_) => e,
        other => Error::Verification(other.to_string()),
    })?;
    log::info!(
        "face verification for {}: {} (distance {:.4})",
        record.masked_citizen_id(),
        face_match.status(),
        face_match.distance
    );
    Ok(VerifiedRecord {
        record,
        live_image: Some(candidate),
        face_match: Some(face_match),
    })
}
