// thaiid-rs/thaiid/src/transport/traits.rs

use std::time::Duration;

use crate::card::CardConnection;
use crate::protocol::ApduResponse;
use crate::types::{Protocols, ShareMode};
use crate::Result;

/// CardTransport abstracts the PC/SC reader away from protocol/reader logic.
///
/// A transport holds at most one card connection at a time.
pub trait CardTransport {
    /// Whether the smart card service is reachable at all.
    fn service_available(&mut self) -> bool {
        true
    }

    /// Reader names in enumeration order. Empty when no reader is attached
    /// or the service is not running.
    fn list_readers(&mut self) -> Vec<String>;

    /// Whether any reader currently holds a card.
    fn card_present(&mut self) -> bool;

    /// Block up to `timeout` for a card and return the reader holding it.
    /// Fails with `NoCardPresent` when the timeout elapses.
    fn wait_for_card(&mut self, timeout: Duration) -> Result<String>;

    /// Connect to the card in `reader`, negotiating one of `protocols`.
    fn connect(
        &mut self,
        reader: &str,
        protocols: Protocols,
        share_mode: ShareMode,
    ) -> Result<CardConnection>;

    /// Send raw command bytes over the active connection. A non-success
    /// status word is returned as data; only reader-level faults are errors.
    fn transmit(&mut self, command: &[u8]) -> Result<ApduResponse>;

    /// Release the active connection. Idempotent and never fails.
    fn disconnect(&mut self);

    /// Whether a card connection is currently held.
    fn is_connected(&self) -> bool;
}

impl<T: CardTransport + ?Sized> CardTransport for Box<T> {
    fn service_available(&mut self) -> bool {
        (**self).service_available()
    }

    fn list_readers(&mut self) -> Vec<String> {
        (**self).list_readers()
    }

    fn card_present(&mut self) -> bool {
        (**self).card_present()
    }

    fn wait_for_card(&mut self, timeout: Duration) -> Result<String> {
        (**self).wait_for_card(timeout)
    }

    fn connect(
        &mut self,
        reader: &str,
        protocols: Protocols,
        share_mode: ShareMode,
    ) -> Result<CardConnection> {
        (**self).connect(reader, protocols, share_mode)
    }

    fn transmit(&mut self, command: &[u8]) -> Result<ApduResponse> {
        (**self).transmit(command)
    }

    fn disconnect(&mut self) {
        (**self).disconnect()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}
