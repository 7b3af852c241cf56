#[path = "../common/mod.rs"]
mod common;

use thaiid::prelude::*;
use thaiid::test_support;
use thaiid::transport::mock::MockTransport;

#[test]
fn no_card_is_reported_and_disconnect_runs_once() {
    let mut reader = common::helpers::reader_with(MockTransport::new());
    let err = reader.read_identity().unwrap_err();
    assert!(matches!(err, Error::NoCardPresent));
    assert!(!err.is_transport_fault());
    assert_eq!(
        err.status_message(),
        "สถานะบัตรประชาชน: ไม่พบบัตร ภายในเวลาที่กำหนด"
    );
    assert_eq!(reader.transport().disconnect_calls, 1);
}

#[test]
fn rejected_negotiation_is_connection_failure() {
    let mut mock = MockTransport::with_card();
    mock.connect_failure = Some("SCARD_E_PROTO_MISMATCH".into());
    let mut reader = common::helpers::reader_with(mock);
    match reader.read_identity() {
        Err(Error::ConnectionFailed(reason)) => assert!(reason.contains("PROTO")),
        other => panic!("expected ConnectionFailed, got: {:?}", other),
    }
    assert_eq!(reader.transport().disconnect_calls, 1);
}

#[test]
fn protocol_outside_offer_is_connection_failure() {
    let mut mock = test_support::scripted_card();
    mock.protocol = Protocol::T1;
    let mut reader = ReaderBuilder::new()
        .with_transport(mock)
        .protocols(Protocols::T0)
        .build()
        .unwrap();
    assert!(matches!(
        reader.read_identity(),
        Err(Error::ConnectionFailed(_))
    ));
}

#[test]
fn non_thai_card_is_applet_not_found() {
    let mut mock = MockTransport::with_card();
    mock.push_response(test_support::sw(0x6A, 0x82));
    let mut reader = common::helpers::reader_with(mock);
    let err = reader.read_identity().unwrap_err();
    assert!(matches!(err, Error::AppletNotFound { sw1: 0x6A, sw2: 0x82 }));
    assert_eq!(reader.transport().disconnect_calls, 1);
    assert_eq!(reader.transport().sent.len(), 1);
}

#[test]
fn card_pulled_mid_read_names_the_field() {
    let mut mock = common::helpers::selected_card();
    for field in &Field::ALL[..4] {
        test_support::seed_field(&mut mock, &test_support::field_payload(*field));
    }
    // gender READ BINARY answers 61 01, then the card is gone
    mock.push_response(test_support::sw(0x61, 0x01));
    mock.push_fault("SCARD_W_REMOVED_CARD");

    let mut reader = common::helpers::reader_with(mock);
    match reader.read_identity() {
        Err(err @ Error::ReadError { .. }) => {
            assert!(err.is_transport_fault());
            let Error::ReadError { field, source } = err else {
                unreachable!()
            };
            assert_eq!(field, Field::Gender);
            assert!(matches!(*source, Error::Transmission(_)));
        }
        other => panic!("expected ReadError, got: {:?}", other),
    }
    assert_eq!(
        reader.state(),
        ReadState::Disconnected(thaiid::reader::Outcome::Failure)
    );
    assert_eq!(reader.transport().disconnect_calls, 1);
}

#[test]
fn missing_reader_and_stopped_service() {
    let mut mock = MockTransport::with_card();
    mock.readers.clear();
    let mut reader = common::helpers::reader_with(mock);
    assert!(matches!(reader.read_identity(), Err(Error::NoReaderFound)));

    reader.transport_mut().service_running = false;
    let err = reader.read_identity().unwrap_err();
    assert!(matches!(err, Error::ServiceUnavailable));
    assert_eq!(
        err.status_message(),
        "สถานะเครื่องอ่าน: บริการ Smart Card ไม่ทำงาน"
    );
    // nothing reached the card
    assert!(reader.transport().sent.is_empty());
}
