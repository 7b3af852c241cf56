//! Helpers that keep personal data out of log output.

/// Mask a citizen ID for logging, keeping only the last four characters.
///
/// Example: `"3100600123456"` -> `"*********3456"`
pub fn mask_citizen_id(citizen_id: &str) -> String {
    let chars: Vec<char> = citizen_id.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let keep = chars.len() - 4;
    let mut out = "*".repeat(keep);
    out.extend(&chars[keep..]);
    out
}
