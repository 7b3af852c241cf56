// thaiid-rs/thaiid/src/reader/builder.rs

use std::time::Duration;

use crate::config::{PhotoConfig, ReaderConfig};
use crate::reader::handle::Reader;
use crate::transport::CardTransport;
use crate::types::{Protocols, ShareMode};
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
pub struct ReaderBuilder<T> {
    transport: Option<T>,
    config: ReaderConfig,
}

impl<T: CardTransport> Default for ReaderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CardTransport> ReaderBuilder<T> {
    /// Builder with default configuration and no transport.
    pub fn new() -> Self {
        Self {
            transport: None,
            config: ReaderConfig::default(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// How long to wait for a card.
    pub fn card_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_card_timeout(timeout);
        self
    }

    /// Protocols offered on connect.
    pub fn protocols(mut self, protocols: Protocols) -> Self {
        self.config = self.config.with_protocols(protocols);
        self
    }

    /// Share mode used on connect.
    pub fn share_mode(mut self, mode: ShareMode) -> Self {
        self.config = self.config.with_share_mode(mode);
        self
    }

    /// Photo chunk limit and threshold.
    pub fn photo(mut self, photo: PhotoConfig) -> Self {
        self.config = self.config.with_photo(photo);
        self
    }

    /// Consume the builder and return a Reader.
    /// Requires a transport to be provided; otherwise returns NoReaderFound.
    pub fn build(self) -> Result<Reader<T>> {
        match self.transport {
            Some(t) => Reader::with_config(t, self.config),
            None => Err(Error::NoReaderFound),
        }
    }
}

#[cfg(feature = "pcsc")]
impl ReaderBuilder<crate::transport::PcscTransport> {
    /// Use the system PC/SC service. The service is contacted lazily, so a
    /// stopped service shows up as `ServiceUnavailable` on the first read.
    pub fn with_pcsc(self) -> Self {
        self.with_transport(crate::transport::PcscTransport::detached())
    }
}
