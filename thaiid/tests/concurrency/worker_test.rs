#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use thaiid::prelude::*;
use thaiid::test_support;
use thaiid::transport::mock::MockTransport;

#[test]
fn worker_delivers_one_message_per_request() {
    let mut mock = test_support::scripted_card();
    test_support::seed_full_card(&mut mock);
    let worker = ReadWorker::spawn(common::helpers::reader_with(mock));

    worker.request_read().unwrap();
    worker.request_read().unwrap();
    worker.request_read().unwrap();

    let results: Vec<_> = (0..3)
        .map(|_| worker.results().recv_timeout(Duration::from_secs(5)).unwrap())
        .collect();
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(results[2].is_err());
    assert!(worker.results().try_recv().is_err());
}

#[test]
fn worker_reports_failures() {
    let worker = ReadWorker::spawn(common::helpers::reader_with(MockTransport::new()));
    worker.request_read().unwrap();
    let err = worker.recv().unwrap_err();
    assert!(matches!(err, Error::NoCardPresent));
    worker.shutdown();
}
