#[path = "../common/mod.rs"]
mod common;

use thaiid::prelude::*;
use thaiid::protocol::exchange;
use thaiid::test_support;
use thaiid::transport::mock::{MOCK_READER, MockTransport};

fn connected() -> MockTransport {
    let mut mock = MockTransport::with_card();
    mock.connect(MOCK_READER, Protocols::ANY, ShareMode::Shared)
        .unwrap();
    mock
}

#[test]
fn more_data_triggers_get_response_with_sw2_as_le() {
    let mut mock = connected();
    mock.push_response(test_support::sw(0x61, 0x0D));
    mock.push_response(test_support::ok(b"1101700203451"));

    let resp = exchange(&mut mock, &Field::CitizenId.command()).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.payload, b"1101700203451".to_vec());
    assert_eq!(mock.sent.len(), 2);
    assert_eq!(mock.sent[1], common::fixtures::get_response_apdu(0x0D));
}

#[test]
fn direct_answer_sends_once() {
    let mut mock = connected();
    mock.push_response(test_support::ok(b"1"));
    let resp = exchange(&mut mock, &Field::Gender.command()).unwrap();
    assert_eq!(resp.payload, b"1".to_vec());
    assert_eq!(mock.sent.len(), 1);
}

#[test]
fn error_status_is_data() {
    let mut mock = connected();
    mock.push_response(test_support::sw(0x6B, 0x00));
    let resp = exchange(&mut mock, &Field::Address.command()).unwrap();
    assert!(!resp.is_success());
    assert_eq!((resp.sw1(), resp.sw2()), (0x6B, 0x00));
    assert_eq!(resp.status.to_string(), "6B 00");
}

#[test]
fn fault_propagates_without_retry() {
    let mut mock = connected();
    mock.push_fault("SCARD_E_COMM_DATA_LOST");
    mock.push_response(test_support::ok(b"unused"));
    assert!(matches!(
        exchange(&mut mock, &Field::Issuer.command()),
        Err(Error::Transmission(_))
    ));
    assert_eq!(mock.sent.len(), 1);
}
