//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers script a MockTransport with the exchanges a real Thai ID
//! card produces, so tests across the crate and tests/ directory share one
//! card fixture.
#![allow(dead_code)]

use encoding_rs::WINDOWS_874;

use crate::protocol::Field;
use crate::transport::mock::MockTransport;

/// Citizen ID carried by the scripted card.
pub const SAMPLE_CITIZEN_ID: &str = "1101700203451";

/// Photo size produced by `seed_full_card`.
pub const SAMPLE_PHOTO_LEN: usize = 5100;

/// Raw field bytes as the card stores them (TIS-620, `#` separators).
#[doc(hidden)]
pub fn field_payload(field: Field) -> Vec<u8> {
    let text = match field {
        Field::CitizenId => SAMPLE_CITIZEN_ID,
        Field::NameTh => "นาย#สมชาย##ใจดี",
        Field::NameEn => "Mr.#Somchai##Jaidee",
        Field::BirthDate => "25300115",
        Field::Gender => "1",
        Field::IssueDate => "25650301",
        Field::ExpireDate => "25740114",
        Field::Issuer => "ที่ว่าการอำเภอเมืองเชียงใหม่/เชียงใหม่",
        Field::Address => "99/1#หมู่ที่ 3####ตำบลสุเทพ#อำเภอเมืองเชียงใหม่#จังหวัดเชียงใหม่",
        Field::RequestNumber => "0001-01-012345",
    };
    tis620(text)
}

/// Encode text the way the card stores it.
#[doc(hidden)]
pub fn tis620(text: &str) -> Vec<u8> {
    WINDOWS_874.encode(text).0.into_owned()
}

/// Payload followed by 90 00.
#[doc(hidden)]
pub fn ok(payload: &[u8]) -> Vec<u8> {
    let mut raw = payload.to_vec();
    raw.extend_from_slice(&[0x90, 0x00]);
    raw
}

/// Bare status word.
#[doc(hidden)]
pub fn sw(sw1: u8, sw2: u8) -> Vec<u8> {
    vec![sw1, sw2]
}

/// SELECT answered with 61 0A, then the GET RESPONSE.
#[doc(hidden)]
pub fn seed_select(mock: &mut MockTransport) {
    mock.push_response(sw(0x61, 0x0A));
    mock.push_response(ok(&[]));
}

/// One field read, answered through GET RESPONSE like a T=0 card does.
#[doc(hidden)]
pub fn seed_field(mock: &mut MockTransport, payload: &[u8]) {
    mock.push_response(sw(0x61, payload.len() as u8));
    mock.push_response(ok(payload));
}

/// Every catalog field, in read order.
#[doc(hidden)]
pub fn seed_fields(mock: &mut MockTransport) {
    for field in Field::ALL {
        seed_field(mock, &field_payload(field));
    }
}

/// JPEG-looking bytes of the given length.
#[doc(hidden)]
pub fn sample_photo(len: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    if len >= 2 {
        data[0] = 0xFF;
        data[1] = 0xD8;
    }
    data
}

/// Photo stream of `len` bytes in 0xFF-byte chunks. The card answers
/// 6B 00 once the data runs out.
#[doc(hidden)]
pub fn seed_photo(mock: &mut MockTransport, len: usize) {
    let data = sample_photo(len);
    let mut chunks = 0;
    for chunk in data.chunks(0xFF) {
        mock.push_response(sw(0x61, 0xFF));
        mock.push_response(ok(chunk));
        chunks += 1;
    }
    if chunks < crate::constants::PHOTO_MAX_CHUNKS as usize {
        mock.push_response(sw(0x6B, 0x00));
    }
}

/// Select, all fields and a photo of `SAMPLE_PHOTO_LEN` bytes.
#[doc(hidden)]
pub fn seed_full_card(mock: &mut MockTransport) {
    seed_select(mock);
    seed_fields(mock);
    seed_photo(mock, SAMPLE_PHOTO_LEN);
}

/// A mock with a card inserted that answers one complete read.
#[doc(hidden)]
pub fn scripted_card() -> MockTransport {
    let mut mock = MockTransport::with_card();
    seed_full_card(&mut mock);
    mock
}
