//! Newsletter module - uploaded newsletter files.
//!
//! Owns upload validation (supported formats, size limit) and the
//! newsletter aggregate itself.

mod errors;
mod file_type;
#[allow(clippy::module_inception)]
mod newsletter;

pub use errors::NewsletterError;
pub use file_type::NewsletterFileType;
pub use newsletter::{Newsletter, MAX_FILE_SIZE_BYTES};
