#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use thaiid::decode::{decode_text, to_thai_digits};
use thaiid::protocol::Field;
use thaiid::utils::mask_citizen_id;

#[test]
fn thai_name_with_fillers() {
    let raw = common::fixtures::padded(Field::NameTh, "นางสาว#มาลี##สุขใส");
    assert_eq!(raw.len(), 100);
    assert_eq!(decode_text(&raw), "นางสาว มาลี สุขใส");
}

#[test]
fn undefined_tis620_bytes_are_dropped() {
    // 0xDB..=0xDE have no mapping in TIS-620
    let mut raw = thaiid::test_support::tis620("ก");
    raw.extend_from_slice(&[0xDB, 0xDC]);
    raw.extend_from_slice(&thaiid::test_support::tis620("ข"));
    assert_eq!(decode_text(&raw), "กข");
}

#[test]
fn nul_padding_is_ignored() {
    assert_eq!(decode_text(b"1\0\0\0"), "1");
}

#[test]
fn thai_digits_for_display() {
    assert_eq!(to_thai_digits("25/12/2568"), "๒๕/๑๒/๒๕๖๘");
    assert_eq!(to_thai_digits("ID 1-2"), "ID ๑-๒");
}

#[test]
fn masking_for_logs() {
    assert_eq!(mask_citizen_id("1101700203451"), "*********3451");
}

proptest! {
    #[test]
    fn decode_never_panics_and_has_no_filler(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let s = decode_text(&bytes);
        prop_assert!(!s.contains('#'));
        prop_assert!(!s.contains("  "));
        prop_assert_eq!(s.trim(), s.as_str());
    }
}
