use crate::config::PhotoConfig;
use crate::protocol::{exchange, photo_chunk_command};
use crate::transport::CardTransport;
use crate::types::Photo;

/// Read the card photo chunk by chunk.
///
/// Chunks are appended while the card answers 90 00. The first other
/// status word or transport fault ends the stream. The result is `None`
/// when the collected bytes do not exceed `config.min_len`; photo trouble
/// never fails the read. At most `config.chunk_count()` chunks are sent.
pub fn assemble_photo<T: CardTransport + ?Sized>(
    transport: &mut T,
    config: &PhotoConfig,
) -> Option<Photo> {
    let max_chunks = config.chunk_count();
    let mut data = Vec::with_capacity(max_chunks as usize * 0xFF);
    let mut chunks = 0u8;

    for index in 0..max_chunks {
        match exchange(transport, &photo_chunk_command(index)) {
            Ok(resp) if resp.is_success() => {
                data.extend_from_slice(&resp.payload);
                chunks += 1;
            }
            Ok(resp) => {
                log::debug!("photo stream ended at chunk {index}: SW {}", resp.status);
                break;
            }
            Err(e) => {
                log::warn!("photo read error at chunk {index}: {e}");
                break;
            }
        }
    }

    if data.len() > config.min_len {
        log::debug!("photo assembled: {} byte(s) in {chunks} chunk(s)", data.len());
        Some(Photo::from_bytes(data))
    } else {
        log::warn!(
            "no usable photo: {} byte(s) in {chunks} chunk(s), need more than {}",
            data.len(),
            config.min_len
        );
        None
    }
}
