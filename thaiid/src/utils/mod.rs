//! Utilities for thaiid: small, reusable helpers used across the crate.
//!
//! Hex rendering for APDU logs, timeout defaults, and log masking.

pub mod hex;
pub mod mask;
pub mod timeout;

pub use hex::*;
pub use mask::*;
pub use timeout::*;
