// thaiid-rs/thaiid/src/constants.rs
//! Common protocol constants used across the crate

/// Status word reported for a successfully executed command: 0x90 0x00
pub const SW_SUCCESS: (u8, u8) = (0x90, 0x00);

/// SW1 signalling "response bytes still available, SW2 tells how many"
pub const SW1_MORE_DATA: u8 = 0x61;

/// GET RESPONSE header (CLA, INS, P1, P2). LE is taken from SW2.
pub const GET_RESPONSE_HEADER: [u8; 4] = [0x00, 0xC0, 0x00, 0x00];

/// SELECT by DF name header (CLA, INS, P1, P2)
pub const SELECT_BY_NAME_HEADER: [u8; 4] = [0x00, 0xA4, 0x04, 0x00];

/// Thai national ID card applet identifier
pub const THAI_ID_AID: [u8; 8] = [0xA0, 0x00, 0x00, 0x00, 0x54, 0x48, 0x00, 0x01];

/// Proprietary class byte used by the Thai ID applet for READ BINARY
pub const THAI_ID_CLA: u8 = 0x80;

/// READ BINARY instruction
pub const INS_READ_BINARY: u8 = 0xB0;

/// Requested length of every photo chunk
pub const PHOTO_CHUNK_LEN: u8 = 0xFF;

/// First photo chunk offset (P1, P2); later chunks step P1 up and P2 down
pub const PHOTO_FIRST_OFFSET: (u8, u8) = (0x01, 0x7B);

/// Default number of photo chunk requests
pub const PHOTO_MAX_CHUNKS: u8 = 20;

/// Chunks addressable before P2 runs past 00 (indices 0..=0x7B).
pub const PHOTO_CHUNK_LIMIT: u8 = PHOTO_FIRST_OFFSET.1 + 1;

/// Photos at or below this many bytes are treated as unusable
pub const PHOTO_MIN_LEN: usize = 100;

/// Buddhist Era year offset from the Gregorian calendar
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Date sentinel meaning the card never expires
pub const LIFELONG_SENTINEL: &str = "99999999";

/// Largest response a short APDU can carry (256 data bytes + SW1 SW2)
pub const MAX_SHORT_RESPONSE_LEN: usize = 258;
