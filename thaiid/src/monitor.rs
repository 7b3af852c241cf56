// thaiid-rs/thaiid/src/monitor.rs
//! Card presence monitor
//!
//! Watches readers on a background thread and turns presence changes into
//! `CardEvent`s on a channel. The monitor never touches a card connection;
//! a removal during a read shows up in the read itself as a transmission
//! fault.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::Result;
use crate::types::Atr;

/// One reader as seen by a single poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderPresence {
    /// Reader name
    pub reader: String,
    /// ATR of the inserted card, `None` when the slot is empty
    pub atr: Option<Vec<u8>>,
}

impl ReaderPresence {
    /// Reader with an empty slot.
    pub fn empty(reader: impl Into<String>) -> Self {
        Self {
            reader: reader.into(),
            atr: None,
        }
    }

    /// Reader holding a card with this ATR.
    pub fn with_card(reader: impl Into<String>, atr: Vec<u8>) -> Self {
        Self {
            reader: reader.into(),
            atr: Some(atr),
        }
    }
}

/// Source of reader presence snapshots.
///
/// `poll` may block up to `timeout` waiting for a change.
pub trait PresenceSource: Send {
    /// Current state of every attached reader.
    fn poll(&mut self, timeout: Duration) -> Result<Vec<ReaderPresence>>;
}

impl<F> PresenceSource for F
where
    F: FnMut(Duration) -> Result<Vec<ReaderPresence>> + Send,
{
    fn poll(&mut self, timeout: Duration) -> Result<Vec<ReaderPresence>> {
        self(timeout)
    }
}

/// Presence change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardEvent {
    /// A card appeared in `reader`
    Inserted {
        /// Reader name
        reader: String,
        /// ATR of the new card
        atr: Atr,
    },
    /// The card left `reader`, or the reader was unplugged with a card in it
    Removed {
        /// Reader name
        reader: String,
    },
}

impl CardEvent {
    /// Reader the event happened in.
    pub fn reader(&self) -> &str {
        match self {
            Self::Inserted { reader, .. } | Self::Removed { reader } => reader,
        }
    }
}

/// Compare a snapshot with the previous one and record it.
fn diff(
    previous: &mut HashMap<String, Option<Vec<u8>>>,
    snapshot: Vec<ReaderPresence>,
) -> Vec<CardEvent> {
    let mut events = Vec::new();

    let seen: Vec<&str> = snapshot.iter().map(|p| p.reader.as_str()).collect();
    let vanished: Vec<String> = previous
        .keys()
        .filter(|name| !seen.contains(&name.as_str()))
        .cloned()
        .collect();
    for name in vanished {
        // A reader unplugged with a card in it counts as a removal
        if let Some(Some(_)) = previous.remove(&name) {
            events.push(CardEvent::Removed { reader: name });
        }
    }

    for presence in snapshot {
        let before = previous.get(&presence.reader).cloned().flatten();
        match (&before, &presence.atr) {
            (None, Some(atr)) => events.push(CardEvent::Inserted {
                reader: presence.reader.clone(),
                atr: Atr::from_bytes(atr.clone()),
            }),
            (Some(old), Some(atr)) if old != atr => {
                events.push(CardEvent::Removed {
                    reader: presence.reader.clone(),
                });
                events.push(CardEvent::Inserted {
                    reader: presence.reader.clone(),
                    atr: Atr::from_bytes(atr.clone()),
                });
            }
            (Some(_), None) => events.push(CardEvent::Removed {
                reader: presence.reader.clone(),
            }),
            _ => {}
        }
        previous.insert(presence.reader, presence.atr);
    }

    events
}

/// Background presence watcher. Stops when dropped.
pub struct CardMonitor {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CardMonitor {
    /// Start watching. Events arrive on the returned receiver until the
    /// monitor is stopped or the receiver is dropped.
    pub fn spawn<P>(source: P, interval: Duration) -> (Self, Receiver<CardEvent>)
    where
        P: PresenceSource + 'static,
    {
        let (tx, rx) = unbounded();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let handle = thread::spawn(move || watch(source, interval, flag, tx));
        (
            Self {
                running,
                handle: Some(handle),
            },
            rx,
        )
    }

    /// Whether the watcher thread is still polling.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the watcher and wait for its thread.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("card monitor thread panicked");
            }
        }
    }
}

impl Drop for CardMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

fn watch<P: PresenceSource>(
    mut source: P,
    interval: Duration,
    running: Arc<AtomicBool>,
    tx: Sender<CardEvent>,
) {
    let mut previous = HashMap::new();
    while running.load(Ordering::SeqCst) {
        let started = Instant::now();
        let changed = match source.poll(interval) {
            Ok(snapshot) => {
                let events = diff(&mut previous, snapshot);
                let changed = !events.is_empty();
                for event in events {
                    log::debug!("card event: {:?}", event);
                    if tx.send(event).is_err() {
                        running.store(false, Ordering::SeqCst);
                        return;
                    }
                }
                changed
            }
            Err(e) => {
                log::debug!("presence poll failed: {e}");
                false
            }
        };
        // ポーリングが即座に戻るプローブでもビジーループにしない
        if !changed {
            let elapsed = started.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
    }
    log::debug!("card monitor exiting");
}
