#[path = "../common/mod.rs"]
mod common;

use thaiid::prelude::*;
use thaiid::test_support;

fn card_with_photo(len: usize) -> thaiid::transport::mock::MockTransport {
    let mut mock = common::helpers::selected_card();
    test_support::seed_fields(&mut mock);
    test_support::seed_photo(&mut mock, len);
    mock
}

#[test]
fn truncated_photo_over_threshold_is_kept() {
    let mut reader = common::helpers::reader_with(card_with_photo(300));
    let record = reader.read_identity().unwrap();
    let photo = record.photo().unwrap();
    assert_eq!(photo.len(), 300);
    assert!(photo.is_jpeg());
}

#[test]
fn photo_at_threshold_is_absent() {
    let mut reader = common::helpers::reader_with(card_with_photo(100));
    let record = reader.read_identity().unwrap();
    assert!(record.photo().is_none());
    assert_eq!(record.citizen_id(), test_support::SAMPLE_CITIZEN_ID);
}

#[test]
fn photo_fault_does_not_fail_the_read() {
    let mut mock = common::helpers::selected_card();
    test_support::seed_fields(&mut mock);
    mock.push_response(test_support::ok(&test_support::sample_photo(255)));
    mock.push_fault("SCARD_W_REMOVED_CARD");

    let mut reader = common::helpers::reader_with(mock);
    let record = reader.read_identity().unwrap();
    assert_eq!(record.photo().map(|p| p.len()), Some(255));
}

#[test]
fn photo_limits_are_configurable() {
    let mut reader = ReaderBuilder::new()
        .with_transport(card_with_photo(1000))
        .photo(PhotoConfig {
            max_chunks: 2,
            min_len: 600,
        })
        .build()
        .unwrap();
    // two chunks = 510 bytes, not above 600
    let record = reader.read_identity().unwrap();
    assert!(record.photo().is_none());
}
