#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use thaiid::prelude::*;
use thaiid::transport::mock::{MOCK_READER, MockCall, MockTransport};

#[test]
fn mock_transport_transmit_and_record() {
    let mut m = MockTransport::with_card();
    m.push_response(vec![0x01, 0x90, 0x00]);
    let reader = m.wait_for_card(Duration::from_millis(1)).unwrap();
    assert_eq!(reader, MOCK_READER);
    let conn = m.connect(&reader, Protocols::ANY, ShareMode::Shared).unwrap();
    assert_eq!(conn.reader(), MOCK_READER);

    let r = m.transmit(&[0xAA]).unwrap();
    assert_eq!(r.payload, vec![0x01]);
    assert_eq!(m.pop_sent(), Some(vec![0xAA]));
    assert_eq!(
        m.calls,
        vec![
            MockCall::WaitForCard,
            MockCall::Connect,
            MockCall::Transmit(vec![0xAA])
        ]
    );
}

#[test]
fn transmit_without_connection_fails() {
    let mut m = MockTransport::with_card();
    m.push_response(vec![0x90, 0x00]);
    assert!(matches!(m.transmit(&[0x00]), Err(Error::Transmission(_))));
}

#[test]
fn short_response_is_invalid_length() {
    let mut m = MockTransport::with_card();
    m.connect(MOCK_READER, Protocols::ANY, ShareMode::Shared)
        .unwrap();
    m.push_response(vec![0x90]);
    assert!(matches!(
        m.transmit(&[0x00]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn disconnect_is_idempotent() {
    let mut m = MockTransport::with_card();
    m.connect(MOCK_READER, Protocols::ANY, ShareMode::Shared)
        .unwrap();
    m.disconnect();
    m.disconnect();
    assert!(!m.is_connected());
    assert_eq!(m.disconnect_calls, 2);
}
