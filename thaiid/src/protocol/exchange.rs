// thaiid-rs/thaiid/src/protocol/exchange.rs

use crate::protocol::apdu::{ApduCommand, ApduResponse};
use crate::transport::CardTransport;
use crate::utils::to_hex_string;
use crate::Result;

/// Send `command` and, when the card answers SW1=0x61, fetch the pending
/// bytes with GET RESPONSE. T=1 readers answer in one shot and never take
/// the second branch. No retries: a transmission fault propagates as-is.
pub fn exchange<T: CardTransport + ?Sized>(
    transport: &mut T,
    command: &ApduCommand,
) -> Result<ApduResponse> {
    let bytes = command.encode();
    let response = transport.transmit(&bytes)?;
    log::debug!(
        "APDU {} -> {} byte(s), SW {}",
        to_hex_string(&bytes),
        response.payload.len(),
        response.status
    );

    match response.status.more_data() {
        Some(pending) => {
            let get_response = ApduCommand::get_response(pending).encode();
            let full = transport.transmit(&get_response)?;
            log::debug!(
                "GET RESPONSE {} -> {} byte(s), SW {}",
                to_hex_string(&get_response),
                full.payload.len(),
                full.status
            );
            Ok(full)
        }
        None => Ok(response),
    }
}
