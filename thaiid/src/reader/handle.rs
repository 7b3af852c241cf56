// thaiid-rs/thaiid/src/reader/handle.rs

use derive_more::Display;

use crate::card::{CardSession, IdentityRecord, IdentityRecordBuilder};
use crate::config::ReaderConfig;
use crate::protocol::{Field, catalog};
use crate::transport::CardTransport;
use crate::{Error, Result};

/// How the last read ended.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Record returned
    #[display(fmt = "success")]
    Success,
    /// Read aborted with an error
    #[display(fmt = "failure")]
    Failure,
}

/// Read sequence state.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// No read started yet
    #[display(fmt = "idle")]
    Idle,
    /// Waiting for and connecting to a card
    #[display(fmt = "connecting")]
    Connecting,
    /// Thai ID applet selected
    #[display(fmt = "applet selected")]
    AppletSelected,
    /// Reading text fields
    #[display(fmt = "reading fields")]
    ReadingFields,
    /// Reading photo chunks
    #[display(fmt = "assembling photo")]
    AssemblingPhoto,
    /// Transport released after a read
    #[display(fmt = "disconnected ({})", _0)]
    Disconnected(Outcome),
}

/// Read orchestrator: owns the transport and runs one full card read at a
/// time.
///
/// Every read ends in `Disconnected`, and the transport is released exactly
/// once per read whatever the result.
pub struct Reader<T: CardTransport> {
    transport: T,
    config: ReaderConfig,
    state: ReadState,
}

impl<T: CardTransport> Reader<T> {
    /// Create a Reader with the default configuration.
    pub fn new(transport: T) -> Result<Self> {
        Self::with_config(transport, ReaderConfig::default())
    }

    /// Create a Reader. The command catalog is checked here so a broken
    /// table never reaches a card.
    pub fn with_config(transport: T, config: ReaderConfig) -> Result<Self> {
        catalog::validate()?;
        Ok(Self {
            transport,
            config,
            state: ReadState::Idle,
        })
    }

    /// Run the whole read sequence and return the decoded record.
    pub fn read_identity(&mut self) -> Result<IdentityRecord> {
        let result = self.run_read();
        self.transport.disconnect();

        let outcome = match &result {
            Ok(record) => {
                log::info!("card read complete: {}", record.masked_citizen_id());
                Outcome::Success
            }
            Err(e) if e.is_transport_fault() => {
                log::warn!("card read interrupted: {e}");
                Outcome::Failure
            }
            Err(e) => {
                log::info!("card read failed: {e}");
                Outcome::Failure
            }
        };
        Self::enter(&mut self.state, ReadState::Disconnected(outcome));
        result
    }

    fn run_read(&mut self) -> Result<IdentityRecord> {
        Self::enter(&mut self.state, ReadState::Connecting);
        if self.transport.is_connected() {
            log::debug!("releasing previous card session");
            self.transport.disconnect();
        }

        if !self.transport.service_available() {
            return Err(Error::ServiceUnavailable);
        }
        if self.transport.list_readers().is_empty() {
            return Err(Error::NoReaderFound);
        }
        let reader = self.transport.wait_for_card(self.config.card_timeout)?;

        let config = &self.config;
        let state = &mut self.state;
        let session = CardSession::open(&mut self.transport, &reader, config)?;
        let mut session = session.select_applet()?;
        Self::enter(state, ReadState::AppletSelected);

        Self::enter(state, ReadState::ReadingFields);
        let mut builder = IdentityRecordBuilder::new();
        for field in Field::ALL {
            let resp = session.read_field(field)?;
            builder = builder.field(field, &resp.payload);
        }

        Self::enter(state, ReadState::AssemblingPhoto);
        let photo = session.read_photo(&config.photo);
        builder.photo(photo).build()
    }

    fn enter(state: &mut ReadState, next: ReadState) {
        log::debug!("read state: {} -> {}", state, next);
        *state = next;
    }

    /// Whether the service is up and at least one reader is attached.
    pub fn reader_available(&mut self) -> bool {
        self.transport.service_available() && !self.transport.list_readers().is_empty()
    }

    /// Whether a card is currently inserted.
    pub fn card_present(&mut self) -> bool {
        self.transport.card_present()
    }

    /// Attached reader names.
    pub fn readers(&mut self) -> Vec<String> {
        self.transport.list_readers()
    }

    /// Current position in the read sequence.
    pub fn state(&self) -> ReadState {
        self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrow the transport mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back.
    pub fn into_inner(self) -> T {
        self.transport
    }
}
