use crate::types::{Atr, Protocol, ShareMode};

/// One physical session with an inserted card: reader, negotiated
/// protocol and Answer-To-Reset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardConnection {
    /// Reader the card sits in
    pub reader: String,
    /// Negotiated protocol
    pub protocol: Protocol,
    /// Share mode the connection was opened with
    pub share_mode: ShareMode,
    /// Answer-To-Reset
    pub atr: Atr,
}

impl CardConnection {
    /// Connection details as reported by the transport.
    pub fn new(reader: String, protocol: Protocol, share_mode: ShareMode, atr: Atr) -> Self {
        Self {
            reader,
            protocol,
            share_mode,
            atr,
        }
    }

    /// Reader name.
    pub fn reader(&self) -> &str {
        &self.reader
    }

    /// Negotiated protocol.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Answer-To-Reset of the inserted card.
    pub fn atr(&self) -> &Atr {
        &self.atr
    }
}
