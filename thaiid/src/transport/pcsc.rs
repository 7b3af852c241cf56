// thaiid-rs/thaiid/src/transport/pcsc.rs
//! PC/SC transport implementation

use std::ffi::CString;
use std::fmt;
use std::time::{Duration, Instant};

use pcsc::{Card, Context, Disposition, ReaderState, Scope, State};

use crate::card::CardConnection;
use crate::constants::MAX_SHORT_RESPONSE_LEN;
use crate::monitor::{PresenceSource, ReaderPresence};
use crate::protocol::ApduResponse;
use crate::transport::traits::CardTransport;
use crate::types::{Atr, Protocol, Protocols, ShareMode};
use crate::{Error, Result};

impl From<ShareMode> for pcsc::ShareMode {
    fn from(mode: ShareMode) -> Self {
        match mode {
            ShareMode::Shared => Self::Shared,
            ShareMode::Exclusive => Self::Exclusive,
        }
    }
}

impl From<Protocols> for pcsc::Protocols {
    fn from(protocols: Protocols) -> Self {
        let mut out = pcsc::Protocols::empty();
        if protocols.t0 {
            out |= pcsc::Protocols::T0;
        }
        if protocols.t1 {
            out |= pcsc::Protocols::T1;
        }
        out
    }
}

fn card_in(state: State) -> bool {
    state.contains(State::PRESENT) && !state.contains(State::EMPTY) && !state.contains(State::MUTE)
}

/// Transport implementation using PC/SC
pub struct PcscTransport {
    /// PC/SC context, (re)established lazily so a service restart is picked up
    context: Option<Context>,
    /// Card connection, if established
    card: Option<Card>,
    /// Reader of the active connection
    reader: Option<String>,
}

impl fmt::Debug for PcscTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcscTransport")
            .field("has_context", &self.context.is_some())
            .field("has_card", &self.card.is_some())
            .field("reader", &self.reader)
            .finish()
    }
}

impl PcscTransport {
    /// Create a transport. Fails with `ServiceUnavailable` when the smart
    /// card service cannot be reached.
    pub fn open() -> Result<Self> {
        let mut transport = Self::detached();
        transport.context()?;
        Ok(transport)
    }

    /// Create a transport without touching the service yet.
    pub fn detached() -> Self {
        Self {
            context: None,
            card: None,
            reader: None,
        }
    }

    fn context(&mut self) -> Result<&Context> {
        let valid = self.context.as_ref().is_some_and(|ctx| ctx.is_valid().is_ok());
        if !valid {
            self.card = None;
            self.reader = None;
            let ctx = Context::establish(Scope::User).map_err(|e| {
                log::debug!("pcsc establish failed: {e}");
                Error::ServiceUnavailable
            })?;
            self.context = Some(ctx);
        }
        self.context.as_ref().ok_or(Error::ServiceUnavailable)
    }

    fn reader_states(&mut self) -> Result<Vec<ReaderState>> {
        let ctx = self.context()?;
        let readers = match ctx.list_readers_owned() {
            Ok(readers) => readers,
            Err(pcsc::Error::NoReadersAvailable) => return Err(Error::NoReaderFound),
            Err(pcsc::Error::NoService) | Err(pcsc::Error::ServiceStopped) => {
                return Err(Error::ServiceUnavailable);
            }
            Err(e) => return Err(Error::Transmission(format!("list readers: {e}"))),
        };
        if readers.is_empty() {
            return Err(Error::NoReaderFound);
        }
        let mut states: Vec<ReaderState> = readers
            .into_iter()
            .map(|name| ReaderState::new(name, State::UNAWARE))
            .collect();
        // First call with UNAWARE returns the current state immediately.
        match ctx.get_status_change(Some(Duration::ZERO), &mut states) {
            Ok(()) | Err(pcsc::Error::Timeout) => Ok(states),
            Err(e) => Err(Error::Transmission(format!("status change: {e}"))),
        }
    }

    fn presence_of(states: &[ReaderState]) -> Vec<ReaderPresence> {
        states
            .iter()
            .map(|rs| ReaderPresence {
                reader: rs.name().to_string_lossy().into_owned(),
                atr: card_in(rs.event_state()).then(|| rs.atr().to_vec()),
            })
            .collect()
    }
}

impl CardTransport for PcscTransport {
    fn service_available(&mut self) -> bool {
        self.context().is_ok()
    }

    fn list_readers(&mut self) -> Vec<String> {
        let Ok(ctx) = self.context() else {
            return Vec::new();
        };
        match ctx.list_readers_owned() {
            Ok(readers) => readers
                .into_iter()
                .map(|r| r.to_string_lossy().into_owned())
                .collect(),
            Err(e) => {
                log::debug!("list readers: {e}");
                Vec::new()
            }
        }
    }

    fn card_present(&mut self) -> bool {
        self.reader_states()
            .map(|states| states.iter().any(|rs| card_in(rs.event_state())))
            .unwrap_or(false)
    }

    fn wait_for_card(&mut self, timeout: Duration) -> Result<String> {
        let deadline = Instant::now() + timeout;
        let mut states = self.reader_states()?;
        loop {
            if let Some(rs) = states.iter().find(|rs| card_in(rs.event_state())) {
                return Ok(rs.name().to_string_lossy().into_owned());
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(Error::NoCardPresent);
            }
            for rs in &mut states {
                rs.sync_current_state();
            }
            let ctx = self.context()?;
            match ctx.get_status_change(Some(remaining), &mut states) {
                Ok(()) => {}
                Err(pcsc::Error::Timeout) => return Err(Error::NoCardPresent),
                Err(e) => return Err(Error::Transmission(format!("status change: {e}"))),
            }
        }
    }

    fn connect(
        &mut self,
        reader: &str,
        protocols: Protocols,
        share_mode: ShareMode,
    ) -> Result<CardConnection> {
        self.disconnect();
        let name = CString::new(reader)
            .map_err(|_| Error::ConnectionFailed(format!("invalid reader name: {reader}")))?;
        let ctx = self.context()?;
        let card = ctx
            .connect(&name, share_mode.into(), protocols.into())
            .map_err(|e| Error::ConnectionFailed(e.to_string()))?;

        let status = card
            .status2_owned()
            .map_err(|e| Error::ConnectionFailed(format!("card status: {e}")))?;
        let protocol = match status.protocol2() {
            Some(pcsc::Protocol::T0) => Protocol::T0,
            Some(pcsc::Protocol::T1) => Protocol::T1,
            other => {
                return Err(Error::ConnectionFailed(format!(
                    "unsupported protocol negotiated: {other:?}"
                )));
            }
        };
        let atr = Atr::from_bytes(status.atr().to_vec());

        self.card = Some(card);
        self.reader = Some(reader.to_string());
        Ok(CardConnection::new(
            reader.to_string(),
            protocol,
            share_mode,
            atr,
        ))
    }

    fn transmit(&mut self, command: &[u8]) -> Result<ApduResponse> {
        let Some(card) = self.card.as_mut() else {
            return Err(Error::Transmission("not connected".into()));
        };
        let mut buffer = [0u8; MAX_SHORT_RESPONSE_LEN];
        match card.transmit(command, &mut buffer) {
            Ok(raw) => ApduResponse::from_raw(raw),
            Err(e) => {
                // Card was reset or pulled: the handle is dead
                if matches!(e, pcsc::Error::ResetCard | pcsc::Error::RemovedCard) {
                    self.card = None;
                    self.reader = None;
                }
                Err(Error::Transmission(e.to_string()))
            }
        }
    }

    fn disconnect(&mut self) {
        if let Some(card) = self.card.take() {
            match card.disconnect(Disposition::LeaveCard) {
                Ok(()) => log::debug!("card disconnected from {:?}", self.reader),
                Err((_card, e)) => log::warn!("error disconnecting card: {e}"),
            }
        }
        self.reader = None;
    }

    fn is_connected(&self) -> bool {
        self.card.is_some()
    }
}

impl PresenceSource for PcscTransport {
    fn poll(&mut self, timeout: Duration) -> Result<Vec<ReaderPresence>> {
        let mut states = match self.reader_states() {
            Ok(states) => states,
            Err(Error::NoReaderFound) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        for rs in &mut states {
            rs.sync_current_state();
        }
        let ctx = self.context()?;
        match ctx.get_status_change(Some(timeout), &mut states) {
            Ok(()) | Err(pcsc::Error::Timeout) => Ok(Self::presence_of(&states)),
            Err(e) => Err(Error::Transmission(format!("status change: {e}"))),
        }
    }
}

impl Drop for PcscTransport {
    fn drop(&mut self) {
        self.disconnect();
    }
}
