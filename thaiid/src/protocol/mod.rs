// thaiid-rs/thaiid/src/protocol/mod.rs

/// Command and response APDUs
pub mod apdu;
pub mod catalog;
/// Transmit with GET RESPONSE handling
pub mod exchange;
/// Bounds-checked byte access
pub mod parser;

pub use apdu::{ApduCommand, ApduResponse};
pub use catalog::{Field, SELECT_APPLET, photo_chunk_command};
pub use exchange::exchange;
