// thaiid-rs/thaiid/src/reader/worker.rs
//! Background read worker
//!
//! Runs card reads on a dedicated thread so an interactive caller never
//! blocks on the card. Requests are served one at a time, in order, and
//! every request produces exactly one result message.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::card::IdentityRecord;
use crate::reader::handle::Reader;
use crate::transport::CardTransport;
use crate::{Error, Result};

enum Request {
    Read,
    Shutdown,
}

/// Owns a `Reader` on its own thread.
pub struct ReadWorker {
    requests: Sender<Request>,
    results: Receiver<Result<IdentityRecord>>,
    handle: Option<JoinHandle<()>>,
}

impl ReadWorker {
    /// Move `reader` onto a new worker thread.
    pub fn spawn<T>(mut reader: Reader<T>) -> Self
    where
        T: CardTransport + Send + 'static,
    {
        let (req_tx, req_rx) = unbounded::<Request>();
        let (res_tx, res_rx) = unbounded();

        let handle = thread::spawn(move || {
            for request in req_rx {
                match request {
                    Request::Read => {
                        let result = reader.read_identity();
                        if res_tx.send(result).is_err() {
                            break;
                        }
                    }
                    Request::Shutdown => break,
                }
            }
            log::debug!("read worker exiting");
        });

        Self {
            requests: req_tx,
            results: res_rx,
            handle: Some(handle),
        }
    }

    /// Queue one read. The result arrives on `results()`.
    pub fn request_read(&self) -> Result<()> {
        self.requests
            .send(Request::Read)
            .map_err(|_| Error::WorkerStopped)
    }

    /// Completion channel, one message per requested read.
    pub fn results(&self) -> &Receiver<Result<IdentityRecord>> {
        &self.results
    }

    /// Block until the next result.
    pub fn recv(&self) -> Result<IdentityRecord> {
        self.results.recv().map_err(|_| Error::WorkerStopped)?
    }

    /// Stop the worker after the read in progress, if any.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.requests.send(Request::Shutdown);
            if handle.join().is_err() {
                log::warn!("read worker panicked");
            }
        }
    }
}

impl Drop for ReadWorker {
    fn drop(&mut self) {
        self.stop();
    }
}
