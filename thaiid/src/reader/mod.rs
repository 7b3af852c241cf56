// thaiid-rs/thaiid/src/reader/mod.rs

/// `ReaderBuilder`
pub mod builder;
/// `Reader` and its state machine
pub mod handle;
pub mod worker;

pub use builder::ReaderBuilder;
pub use handle::{Outcome, ReadState, Reader};
pub use worker::ReadWorker;

#[cfg(feature = "async")]
use crate::{Error, Result, card::IdentityRecord, transport::CardTransport};

/// Run one read on tokio's blocking pool. The reader is handed back with
/// the result so it can be reused.
#[cfg(feature = "async")]
pub async fn read_identity_async<T>(
    mut reader: Reader<T>,
) -> Result<(Reader<T>, Result<IdentityRecord>)>
where
    T: CardTransport + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let result = reader.read_identity();
        (reader, result)
    })
    .await
    .map_err(|e| {
        log::warn!("blocking read task failed: {e}");
        Error::WorkerStopped
    })
}
