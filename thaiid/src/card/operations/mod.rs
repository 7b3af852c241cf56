/// Chunked photo read
pub mod photo;
/// Applet selection and field reads
pub mod read;

// Re-export at the operations root so callers can use
// `crate::card::operations::read_field(...)`.
pub use photo::assemble_photo;
pub use read::{read_field, select_applet};
