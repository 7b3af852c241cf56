// thaiid-rs/thaiid/src/types.rs

use derive_more::Display;

use crate::constants::{SW_SUCCESS, SW1_MORE_DATA};

/// Status word (SW1, SW2) - Newtype Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord {
    /// First status byte
    pub sw1: u8,
    /// Second status byte
    pub sw2: u8,
}

impl StatusWord {
    /// `90 00`
    pub const SUCCESS: Self = Self::new(SW_SUCCESS.0, SW_SUCCESS.1);

    /// Status word from its two bytes.
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// `true` for `90 00` only.
    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }

    /// Number of bytes pending for GET RESPONSE when SW1 is 0x61.
    pub fn more_data(&self) -> Option<u8> {
        if self.sw1 == SW1_MORE_DATA {
            Some(self.sw2)
        } else {
            None
        }
    }
}

impl std::fmt::Display for StatusWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X} {:02X}", self.sw1, self.sw2)
    }
}

/// Answer-To-Reset bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atr(Vec<u8>);

impl Atr {
    /// Wrap raw ATR bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw ATR bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Space-separated uppercase hex, as logged.
    pub fn to_hex(&self) -> String {
        crate::utils::to_hex_string(&self.0)
    }
}

/// Transmission protocol negotiated with a contact card
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Protocol {
    /// Character-oriented T=0
    #[display(fmt = "T=0")]
    T0,
    /// Block-oriented T=1
    #[display(fmt = "T=1")]
    T1,
}

/// Set of protocols offered during negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protocols {
    /// Offer T=0
    pub t0: bool,
    /// Offer T=1
    pub t1: bool,
}

impl Protocols {
    /// T=0 only
    pub const T0: Self = Self { t0: true, t1: false };
    /// T=1 only
    pub const T1: Self = Self { t0: false, t1: true };
    /// Either protocol, the card picks
    pub const ANY: Self = Self { t0: true, t1: true };

    /// Whether `protocol` is in the set.
    pub fn allows(&self, protocol: Protocol) -> bool {
        match protocol {
            Protocol::T0 => self.t0,
            Protocol::T1 => self.t1,
        }
    }
}

impl Default for Protocols {
    fn default() -> Self {
        Self::ANY
    }
}

/// Sharing mode requested when connecting to the card
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShareMode {
    /// Other applications may use the card concurrently
    #[default]
    #[display(fmt = "shared")]
    Shared,
    /// This process holds the card alone
    #[display(fmt = "exclusive")]
    Exclusive,
}

/// Card photo (JPEG bytes)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Photo(Vec<u8>);

impl Photo {
    /// Wrap JPEG bytes assembled from the card.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw JPEG bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Photo size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no bytes were assembled.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JPEG start-of-image marker check.
    pub fn is_jpeg(&self) -> bool {
        self.0.starts_with(&[0xFF, 0xD8])
    }
}
