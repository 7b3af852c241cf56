// thaiid-rs/thaiid/src/error.rs

use thiserror::Error;

use crate::protocol::catalog::Field;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// PC/SC service not reachable
    #[error("smart card service is not running")]
    ServiceUnavailable,

    /// No reader attached
    #[error("no smart card reader found")]
    NoReaderFound,

    /// Wait for a card timed out
    #[error("no card presented within the timeout")]
    NoCardPresent,

    /// Connecting to the inserted card failed
    #[error("card connection failed: {0}")]
    ConnectionFailed(String),

    /// SELECT of the Thai ID applet was refused with this status word
    #[error("thai id applet not found: status=({sw1:#04x}, {sw2:#04x})")]
    AppletNotFound {
        /// SW1 of the SELECT response
        sw1: u8,
        /// SW2 of the SELECT response
        sw2: u8,
    },

    /// Reader-level fault during an exchange, e.g. card pulled
    #[error("transmission error: {0}")]
    Transmission(String),

    /// Reading one field failed; `source` holds the cause
    #[error("failed to read field {field}: {source}")]
    ReadError {
        /// Field being read
        field: Field,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// Face verifier failed
    #[error("face verification failed: {0}")]
    Verification(String),

    /// Response shorter than required
    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Minimum length required
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Command catalog failed validation
    #[error("invalid command catalog: {0}")]
    InvalidCatalog(String),

    /// The read worker thread is gone
    #[error("read worker stopped")]
    WorkerStopped,
}

/// Failure surfaced by a card read.
pub type ReadFailure = Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Thai status line shown to the operator for this failure.
    pub fn status_message(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable => "สถานะเครื่องอ่าน: บริการ Smart Card ไม่ทำงาน",
            Self::NoReaderFound => "สถานะเครื่องอ่าน: ไม่พบเครื่องอ่าน",
            Self::NoCardPresent => "สถานะบัตรประชาชน: ไม่พบบัตร ภายในเวลาที่กำหนด",
            Self::ConnectionFailed(_) => "สถานะบัตรประชาชน: เชื่อมต่อบัตรไม่สำเร็จ",
            Self::AppletNotFound { .. } => "สถานะบัตรประชาชน: ไม่ใช่บัตรประชาชนไทย",
            Self::Transmission(_) | Self::ReadError { .. } | Self::InvalidLength { .. } => {
                "สถานะบัตรประชาชน: เกิดข้อผิดพลาดในการอ่านข้อมูล"
            }
            Self::Verification(_) => "ผลการตรวจสอบ: เกิดข้อผิดพลาดในการประมวลผลใบหน้า",
            Self::InvalidCatalog(_) => "สถานะเครื่องอ่าน: ชุดคำสั่งอ่านบัตรไม่ถูกต้อง",
            Self::WorkerStopped => "สถานะเครื่องอ่าน: ระบบอ่านบัตรหยุดทำงาน",
        }
    }

    /// True for faults raised by the reader or card link rather than by
    /// the card's application data.
    pub fn is_transport_fault(&self) -> bool {
        matches!(self, Self::Transmission(_) | Self::ReadError { .. })
    }
}
