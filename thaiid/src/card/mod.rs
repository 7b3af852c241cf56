// thaiid-rs/thaiid/src/card/mod.rs

use std::marker::PhantomData;

use crate::config::{PhotoConfig, ReaderConfig};
use crate::protocol::{ApduResponse, Field};
use crate::transport::CardTransport;
use crate::types::Photo;
use crate::Result;

mod info;
mod record;
pub use info::CardConnection;
pub use record::IdentityRecord;

/// Field-by-field record builder
pub mod builder;
/// APDU-level card operations
pub mod operations;

pub use builder::IdentityRecordBuilder;

/// Type-state marker: connected, applet not selected yet
pub struct Connected;
/// Thai ID applet selected, fields readable
pub struct AppletSelected;

/// Card session that enforces applet selection at compile time: fields and
/// the photo can only be read once the Thai ID applet is selected.
///
/// The session borrows the transport; releasing the connection is left to
/// the owner of the transport.
pub struct CardSession<'t, T: ?Sized, State = Connected> {
    transport: &'t mut T,
    connection: CardConnection,
    _state: PhantomData<State>,
}

impl<'t, T: CardTransport + ?Sized> CardSession<'t, T, Connected> {
    /// Connect to the card in `reader` using the configured protocols and
    /// share mode.
    pub fn open(transport: &'t mut T, reader: &str, config: &ReaderConfig) -> Result<Self> {
        let connection = transport.connect(reader, config.protocols, config.share_mode)?;
        log::debug!(
            "connected to {} ({}), ATR: {}",
            connection.reader(),
            connection.protocol(),
            connection.atr().to_hex()
        );
        Ok(Self {
            transport,
            connection,
            _state: PhantomData,
        })
    }

    /// SELECT the Thai ID applet.
    pub fn select_applet(self) -> Result<CardSession<'t, T, AppletSelected>> {
        operations::select_applet(&mut *self.transport)?;
        Ok(CardSession {
            transport: self.transport,
            connection: self.connection,
            _state: PhantomData,
        })
    }
}

impl<'t, T: CardTransport + ?Sized> CardSession<'t, T, AppletSelected> {
    /// Read one field's raw response.
    pub fn read_field(&mut self, field: Field) -> Result<ApduResponse> {
        operations::read_field(&mut *self.transport, field)
    }

    /// Read the photo; `None` when the card has no usable photo.
    pub fn read_photo(&mut self, config: &PhotoConfig) -> Option<Photo> {
        operations::assemble_photo(&mut *self.transport, config)
    }
}

impl<T: ?Sized, State> CardSession<'_, T, State> {
    /// Reader, protocol and ATR of this session.
    pub fn connection(&self) -> &CardConnection {
        &self.connection
    }
}
