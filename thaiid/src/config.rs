// thaiid-rs/thaiid/src/config.rs
//! Reader configuration

use std::time::Duration;

use crate::constants::{PHOTO_CHUNK_LIMIT, PHOTO_MAX_CHUNKS, PHOTO_MIN_LEN};
use crate::types::{Protocols, ShareMode};
use crate::utils::default_card_timeout;

/// Photo read limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotoConfig {
    /// Upper bound on chunk commands sent per read
    pub max_chunks: u8,
    /// The photo is kept only when strictly longer than this many bytes
    pub min_len: usize,
}

impl PhotoConfig {
    /// Chunk count actually sent, capped at `PHOTO_CHUNK_LIMIT` so every
    /// offset stays on the card's photo area.
    pub const fn chunk_count(&self) -> u8 {
        if self.max_chunks > PHOTO_CHUNK_LIMIT {
            PHOTO_CHUNK_LIMIT
        } else {
            self.max_chunks
        }
    }
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            max_chunks: PHOTO_MAX_CHUNKS,
            min_len: PHOTO_MIN_LEN,
        }
    }
}

/// Configuration options for a card read
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// How long to wait for a card to be presented
    pub card_timeout: Duration,

    /// Protocols offered during negotiation
    pub protocols: Protocols,

    /// Sharing mode for the card connection
    pub share_mode: ShareMode,

    /// Photo read limits
    pub photo: PhotoConfig,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            card_timeout: default_card_timeout(),
            protocols: Protocols::ANY,
            share_mode: ShareMode::Shared,
            photo: PhotoConfig::default(),
        }
    }
}

impl ReaderConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card wait timeout
    pub const fn with_card_timeout(mut self, timeout: Duration) -> Self {
        self.card_timeout = timeout;
        self
    }

    /// Set the offered protocols
    pub const fn with_protocols(mut self, protocols: Protocols) -> Self {
        self.protocols = protocols;
        self
    }

    /// Set the sharing mode
    pub const fn with_share_mode(mut self, mode: ShareMode) -> Self {
        self.share_mode = mode;
        self
    }

    /// Set the photo limits. `max_chunks` is capped at `PHOTO_CHUNK_LIMIT`.
    pub const fn with_photo(mut self, photo: PhotoConfig) -> Self {
        self.photo = PhotoConfig {
            max_chunks: photo.chunk_count(),
            min_len: photo.min_len,
        };
        self
    }
}
