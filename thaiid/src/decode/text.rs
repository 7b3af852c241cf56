// thaiid-rs/thaiid/src/decode/text.rs

use encoding_rs::WINDOWS_874;
use unicode_normalization::UnicodeNormalization;

/// Filler the card uses between name and address parts.
const FILLER: char = '#';

/// Whether `byte` is assigned in TIS-620.
///
/// windows-874 also maps 0x80-0xA0 (euro sign, typographic quotes, NBSP),
/// which TIS-620 leaves undefined, so those are rejected here before
/// decoding.
fn is_tis620(byte: u8) -> bool {
    matches!(byte, 0x00..=0x7F | 0xA1..=0xDA | 0xDF..=0xFB)
}

/// Decode TIS-620 field bytes into a normalized string.
///
/// Bytes TIS-620 does not define are dropped; the rest decode through
/// windows-874, which agrees with TIS-620 on every defined byte. `#`
/// becomes a space, whitespace runs collapse to one space and the result
/// is trimmed and NFC normalized.
pub fn decode_text(bytes: &[u8]) -> String {
    let defined: Vec<u8> = bytes.iter().copied().filter(|&b| is_tis620(b)).collect();
    let (decoded, _had_errors) = WINDOWS_874.decode_without_bom_handling(&defined);
    let cleaned: String = decoded
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER && c != '\0')
        .map(|c| if c == FILLER { ' ' } else { c })
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<&str>>().join(" ");
    collapsed.nfc().collect()
}

/// Replace ASCII digits with Thai digits (๐-๙); other characters pass through.
pub fn to_thai_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(0x0E50 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}
