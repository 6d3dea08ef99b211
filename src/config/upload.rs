//! Upload configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upload configuration
///
/// The HTTP body limit sits above the 10 MiB domain limit so that oversized
/// files reach the application layer and get a structured validation error
/// instead of a bare 413.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl UploadConfig {
    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_body_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_max_body_bytes() -> usize {
    12 * 1024 * 1024
}
