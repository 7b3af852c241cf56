// helpers.rs: reader construction over scripted mocks

use std::time::Duration;

use thaiid::prelude::*;
use thaiid::test_support;
use thaiid::transport::mock::MockTransport;

/// Reader over a mock answering one complete read.
pub fn scripted_reader() -> Reader<MockTransport> {
    reader_with(test_support::scripted_card())
}

pub fn reader_with(mock: MockTransport) -> Reader<MockTransport> {
    ReaderBuilder::new()
        .with_transport(mock)
        .card_timeout(Duration::from_millis(20))
        .build()
        .unwrap()
}

/// Card inserted, applet selected, nothing else scripted.
pub fn selected_card() -> MockTransport {
    let mut mock = MockTransport::with_card();
    test_support::seed_select(&mut mock);
    mock
}
