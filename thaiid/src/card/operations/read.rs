use crate::protocol::{ApduResponse, Field, SELECT_APPLET, exchange};
use crate::transport::CardTransport;
use crate::{Error, Result};

/// Select the Thai ID applet. A non-success status word means the card is
/// present but is not a Thai ID card.
pub fn select_applet<T: CardTransport + ?Sized>(transport: &mut T) -> Result<()> {
    let resp = exchange(transport, &SELECT_APPLET)?;
    if !resp.is_success() {
        return Err(Error::AppletNotFound {
            sw1: resp.sw1(),
            sw2: resp.sw2(),
        });
    }
    Ok(())
}

/// Read one field. Transport faults are wrapped in `ReadError` naming the
/// field; the status word is left for the caller to judge.
pub fn read_field<T: CardTransport + ?Sized>(
    transport: &mut T,
    field: Field,
) -> Result<ApduResponse> {
    let resp = exchange(transport, &field.command()).map_err(|e| Error::ReadError {
        field,
        source: Box::new(e),
    })?;
    if !resp.is_success() {
        log::warn!("field {field} answered SW {}", resp.status);
    }
    Ok(resp)
}
