//! Timeout helpers used across the crate.
//!
//! Centralizes the default card wait so the reader, the CLI and tests agree
//! on one value.

use std::time::Duration;

/// Default time to wait for a card to be presented, in milliseconds.
pub const DEFAULT_CARD_TIMEOUT_MS: u64 = 3000;

/// Poll interval used by the card monitor between presence checks.
pub const DEFAULT_MONITOR_POLL_MS: u64 = 500;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default card wait as Duration.
pub fn default_card_timeout() -> Duration {
    ms(DEFAULT_CARD_TIMEOUT_MS)
}
