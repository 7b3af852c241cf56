// thaiid-rs/thaiid/src/decode/mod.rs
//! Record decoder: turns raw field bytes into display-ready values.
//!
//! Every decoder here is total. Malformed input degrades to a sentinel
//! value instead of an error so an operator still sees the rest of the
//! record.

/// Card dates
pub mod date;
/// Gender codes
pub mod gender;
/// TIS-620 text
pub mod text;

pub use date::{CardDate, decode_date};
pub use gender::Gender;
pub use text::{decode_text, to_thai_digits};
