// thaiid-rs/thaiid/src/lib.rs

//! thaiid
//!
//! Thai national ID card reader over PC/SC: selects the card applet, reads
//! and decodes the personal record and photo, and hands the result to the
//! caller as one typed value.
#![warn(missing_docs)]

/// Card session, connection details and the identity record
pub mod card;
pub mod config;
pub mod constants;
pub mod decode;
/// Error types
pub mod error;
pub mod monitor;
/// Common re-exports
pub mod prelude;
/// APDU encoding and the Thai ID command catalog
pub mod protocol;
/// Read orchestration: `Reader`, its builder and the worker thread
pub mod reader;
pub mod test_support;
/// Transport abstraction (PC/SC and mock)
pub mod transport;
/// Shared newtypes
pub mod types;
pub mod utils;
pub mod verify;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
