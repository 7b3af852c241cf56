// thaiid-rs/thaiid/src/transport/mock.rs

use std::time::Duration;

use crate::card::CardConnection;
use crate::protocol::ApduResponse;
use crate::transport::traits::CardTransport;
use crate::types::{Atr, Protocol, Protocols, ShareMode};
use crate::{Error, Result};

/// Reader name reported by the mock.
pub const MOCK_READER: &str = "Mock Reader 00 00";

/// Call recorded by the mock, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// `wait_for_card`
    WaitForCard,
    /// `connect`
    Connect,
    /// `transmit` with the command bytes
    Transmit(Vec<u8>),
    /// `disconnect`
    Disconnect,
}

/// Mock transport for unit tests. It records calls and returns queued
/// responses (raw bytes including the status word) or queued faults.
#[derive(Debug)]
pub struct MockTransport {
    /// Names returned by `list_readers`
    pub readers: Vec<String>,
    /// `false` simulates a stopped PC/SC service
    pub service_running: bool,
    /// Whether `wait_for_card` finds a card
    pub card_inserted: bool,
    /// Protocol reported on connect
    pub protocol: Protocol,
    /// ATR reported on connect
    pub atr: Vec<u8>,
    /// Testing hook: reject the next connect with this reason
    pub connect_failure: Option<String>,
    /// Queued transmit results, consumed front first
    pub responses: Vec<std::result::Result<Vec<u8>, String>>,
    /// Every command transmitted
    pub sent: Vec<Vec<u8>>,
    /// Every call, in order
    pub calls: Vec<MockCall>,
    /// Number of disconnect calls
    pub disconnect_calls: usize,
    connected: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            readers: vec![MOCK_READER.to_string()],
            service_running: true,
            card_inserted: false,
            protocol: Protocol::T0,
            atr: vec![0x3B, 0x67, 0x00, 0x00, 0x73, 0x20, 0x00, 0x6C, 0x68, 0x90, 0x00],
            connect_failure: None,
            responses: Vec::new(),
            sent: Vec::new(),
            calls: Vec::new(),
            disconnect_calls: 0,
            connected: false,
        }
    }
}

impl MockTransport {
    /// One reader, no card.
    pub fn new() -> Self {
        Self::default()
    }

    /// One reader with a card inserted.
    pub fn with_card() -> Self {
        Self {
            card_inserted: true,
            ..Self::default()
        }
    }

    /// Pretend a previous session was never released.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Queue a raw response, status word included.
    pub fn push_response(&mut self, raw: Vec<u8>) {
        self.responses.push(Ok(raw));
    }

    /// Queue a reader-level fault for the next transmit.
    pub fn push_fault(&mut self, reason: &str) {
        self.responses.push(Err(reason.to_string()));
    }

    /// Take the last transmitted command.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Number of connect calls recorded.
    pub fn connect_calls(&self) -> usize {
        self.calls.iter().filter(|c| **c == MockCall::Connect).count()
    }
}

impl CardTransport for MockTransport {
    fn service_available(&mut self) -> bool {
        self.service_running
    }

    fn list_readers(&mut self) -> Vec<String> {
        if self.service_running {
            self.readers.clone()
        } else {
            Vec::new()
        }
    }

    fn card_present(&mut self) -> bool {
        self.service_running && !self.readers.is_empty() && self.card_inserted
    }

    fn wait_for_card(&mut self, _timeout: Duration) -> Result<String> {
        self.calls.push(MockCall::WaitForCard);
        match self.readers.first() {
            Some(reader) if self.card_inserted => Ok(reader.clone()),
            _ => Err(Error::NoCardPresent),
        }
    }

    fn connect(
        &mut self,
        reader: &str,
        protocols: Protocols,
        share_mode: ShareMode,
    ) -> Result<CardConnection> {
        self.calls.push(MockCall::Connect);
        if let Some(reason) = self.connect_failure.take() {
            return Err(Error::ConnectionFailed(reason));
        }
        if !protocols.allows(self.protocol) {
            return Err(Error::ConnectionFailed(format!(
                "card only speaks {}",
                self.protocol
            )));
        }
        self.connected = true;
        Ok(CardConnection::new(
            reader.to_string(),
            self.protocol,
            share_mode,
            Atr::from_bytes(self.atr.clone()),
        ))
    }

    fn transmit(&mut self, command: &[u8]) -> Result<ApduResponse> {
        self.calls.push(MockCall::Transmit(command.to_vec()));
        self.sent.push(command.to_vec());
        if !self.connected {
            return Err(Error::Transmission("not connected".into()));
        }
        if self.responses.is_empty() {
            return Err(Error::Transmission("no response queued".into()));
        }
        match self.responses.remove(0) {
            Ok(raw) => ApduResponse::from_raw(&raw),
            Err(reason) => Err(Error::Transmission(reason)),
        }
    }

    fn disconnect(&mut self) {
        self.calls.push(MockCall::Disconnect);
        self.disconnect_calls += 1;
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
