// thaiid-rs/thaiid/src/transport/mod.rs

/// Scripted transport for tests
pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
/// `CardTransport`
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "pcsc")]
pub use self::pcsc::PcscTransport;
pub use traits::CardTransport;
