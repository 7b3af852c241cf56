use std::sync::{Arc, Mutex};
use std::time::Duration;

use thaiid::prelude::*;

const READER: &str = "Generic Smart Card Reader 0";

#[test]
fn insert_and_remove_events() {
    let slot: Arc<Mutex<Option<Vec<u8>>>> = Arc::new(Mutex::new(None));
    let source_slot = Arc::clone(&slot);
    let source = move |_timeout: Duration| -> thaiid::Result<Vec<ReaderPresence>> {
        let atr = source_slot.lock().unwrap().clone();
        Ok(vec![ReaderPresence {
            reader: READER.to_string(),
            atr,
        }])
    };

    let (mut monitor, events) = CardMonitor::spawn(source, Duration::from_millis(5));
    let wait = Duration::from_secs(2);

    *slot.lock().unwrap() = Some(vec![0x3B, 0x67]);
    match events.recv_timeout(wait).unwrap() {
        CardEvent::Inserted { reader, atr } => {
            assert_eq!(reader, READER);
            assert_eq!(atr.as_bytes(), &[0x3B, 0x67]);
        }
        other => panic!("expected Inserted, got: {:?}", other),
    }

    *slot.lock().unwrap() = None;
    let removed = events.recv_timeout(wait).unwrap();
    assert_eq!(
        removed,
        CardEvent::Removed {
            reader: READER.to_string()
        }
    );

    monitor.stop();
}

#[test]
fn dropping_monitor_closes_channel() {
    let source = |_timeout: Duration| -> thaiid::Result<Vec<ReaderPresence>> { Ok(Vec::new()) };
    let (monitor, events) = CardMonitor::spawn(source, Duration::from_millis(5));
    drop(monitor);
    assert!(events.recv_timeout(Duration::from_secs(1)).is_err());
}
