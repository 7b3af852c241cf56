#[path = "../common/mod.rs"]
mod common;

use thaiid::prelude::*;
use thaiid::test_support::{self, SAMPLE_CITIZEN_ID};

#[test]
fn full_record_is_decoded() {
    let mut reader = common::helpers::scripted_reader();
    let record = reader.read_identity().unwrap();

    assert_eq!(record.citizen_id(), SAMPLE_CITIZEN_ID);
    assert_eq!(record.name_th(), "นาย สมชาย ใจดี");
    assert_eq!(record.name_en(), "Mr. Somchai Jaidee");
    assert_eq!(record.gender(), &Gender::Male);
    assert_eq!(
        record.birth_date().pair(),
        ("15 มกราคม 2530".to_string(), "15 January 1987".to_string())
    );
    assert_eq!(record.issue_date().en(), "1 March 2022");
    assert_eq!(record.expire_date().th(), "14 มกราคม 2574");
    assert_eq!(record.issuer(), "ที่ว่าการอำเภอเมืองเชียงใหม่/เชียงใหม่");
    assert_eq!(
        record.address(),
        "99/1 หมู่ที่ 3 ตำบลสุเทพ อำเภอเมืองเชียงใหม่ จังหวัดเชียงใหม่"
    );
    assert_eq!(record.request_number(), "0001-01-012345");
    assert_eq!(
        record.photo().map(|p| p.len()),
        Some(test_support::SAMPLE_PHOTO_LEN)
    );
}

#[test]
fn commands_go_out_in_catalog_order() {
    let mut reader = common::helpers::scripted_reader();
    reader.read_identity().unwrap();

    let sent = &reader.transport().sent;
    assert_eq!(sent[0], common::fixtures::select_apdu());
    assert_eq!(sent[1], common::fixtures::get_response_apdu(0x0A));

    // each field: READ BINARY then GET RESPONSE
    for (i, (field, bytes)) in common::fixtures::field_apdus().into_iter().enumerate() {
        assert_eq!(sent[2 + i * 2], bytes, "{field}");
    }
    let first_photo = 2 + Field::ALL.len() * 2;
    assert_eq!(
        sent[first_photo],
        common::fixtures::apdu("80 B0 01 7B 02 00 FF")
    );
}

#[test]
fn padded_fields_are_trimmed() {
    let mut mock = common::helpers::selected_card();
    for field in Field::ALL {
        let text = match field {
            Field::CitizenId => "3100600123456",
            Field::NameEn => "Miss#Malee##Suksai",
            Field::Gender => "2",
            Field::ExpireDate => "99999999",
            Field::IssueDate => "25671301",
            _ => "",
        };
        test_support::seed_field(&mut mock, &common::fixtures::padded(field, text));
    }
    mock.push_response(test_support::sw(0x6B, 0x00));

    let mut reader = common::helpers::reader_with(mock);
    let record = reader.read_identity().unwrap();
    assert_eq!(record.citizen_id(), "3100600123456");
    assert_eq!(record.name_en(), "Miss Malee Suksai");
    assert_eq!(record.gender().th(), "หญิง");
    assert_eq!(record.expire_date().pair().1, "LIFELONG");
    assert_eq!(record.issue_date().pair().0, "ไม่ระบุ");
    assert_eq!(record.birth_date(), CardDate::Unspecified);
    assert!(record.photo().is_none());
}

#[test]
fn field_with_error_status_is_still_decoded() {
    let mut mock = common::helpers::selected_card();
    for field in Field::ALL {
        if field == Field::Issuer {
            mock.push_response(test_support::sw(0x6A, 0x82));
        } else {
            test_support::seed_field(&mut mock, &test_support::field_payload(field));
        }
    }
    test_support::seed_photo(&mut mock, 2000);

    let mut reader = common::helpers::reader_with(mock);
    let record = reader.read_identity().unwrap();
    assert_eq!(record.issuer(), "");
    assert_eq!(record.photo().map(|p| p.len()), Some(2000));
}

#[test]
fn boxed_transport_reads() {
    let boxed: Box<dyn CardTransport + Send> = Box::new(test_support::scripted_card());
    let mut reader = Reader::new(boxed).unwrap();
    assert!(reader.read_identity().is_ok());
    assert!(!reader.transport().is_connected());
    let _: Box<dyn CardTransport + Send> = reader.into_inner();
}
