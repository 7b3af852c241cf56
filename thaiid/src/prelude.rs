// thaiid-rs/thaiid/src/prelude.rs

pub use crate::card::{CardConnection, IdentityRecord};
pub use crate::config::{PhotoConfig, ReaderConfig};
pub use crate::decode::{CardDate, Gender};
pub use crate::monitor::{CardEvent, CardMonitor, PresenceSource, ReaderPresence};
pub use crate::protocol::Field;
pub use crate::reader::{ReadState, ReadWorker, Reader, ReaderBuilder};
pub use crate::transport::CardTransport;
#[cfg(feature = "pcsc")]
pub use crate::transport::PcscTransport;
pub use crate::verify::{FaceMatch, FaceStatus, FaceVerifier, VerifiedRecord, verify_record};
pub use crate::{Atr, Error, Photo, Protocol, Protocols, ReadFailure, Result, ShareMode};

#[cfg(feature = "async")]
pub use crate::reader::read_identity_async;

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, default_card_timeout, mask_citizen_id, ms, to_hex_string};
