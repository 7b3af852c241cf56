// fixtures.rs: provides commonly used APDUs and card payloads

use thaiid::protocol::Field;

/// Wire bytes from a hex string (spaces allowed).
pub fn apdu(hex_str: &str) -> Vec<u8> {
    let compact: String = hex_str.split_whitespace().collect();
    hex::decode(compact).unwrap()
}

pub fn select_apdu() -> Vec<u8> {
    apdu("00 A4 04 00 08 A0 00 00 00 54 48 00 01")
}

pub fn get_response_apdu(len: u8) -> Vec<u8> {
    vec![0x00, 0xC0, 0x00, 0x00, len]
}

/// Field commands as published for the Thai ID applet.
pub fn field_apdus() -> Vec<(Field, Vec<u8>)> {
    vec![
        (Field::CitizenId, apdu("80 B0 00 04 02 00 0D")),
        (Field::NameTh, apdu("80 B0 00 11 02 00 64")),
        (Field::NameEn, apdu("80 B0 00 75 02 00 64")),
        (Field::BirthDate, apdu("80 B0 00 D9 02 00 08")),
        (Field::Gender, apdu("80 B0 00 E1 02 00 01")),
        (Field::IssueDate, apdu("80 B0 01 67 02 00 08")),
        (Field::ExpireDate, apdu("80 B0 01 6F 02 00 08")),
        (Field::Issuer, apdu("80 B0 00 F6 02 00 64")),
        (Field::Address, apdu("80 B0 15 79 02 00 64")),
        (Field::RequestNumber, apdu("80 B0 16 19 02 00 0E")),
    ]
}

/// Fixed-width field as stored on the card: padded with spaces.
pub fn padded(field: Field, text: &str) -> Vec<u8> {
    let mut raw = thaiid::test_support::tis620(text);
    raw.resize(field.expected_len().max(raw.len()), b' ');
    raw
}
