//! Hexadecimal helpers used for APDU logging and display purposes.
//!
//! Output follows the usual smart-card tooling convention: upper-case byte
//! pairs separated by a single space.

use std::fmt::Write;

/// Convert a byte slice to an upper-case hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Convert a byte slice to an upper-case hex string with a single space
/// between each byte.
///
/// Example: `&[0xa0, 0x00]` -> `"A0 00"`
pub fn to_hex_string(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}
