//! Newsletter-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, NewsletterId};

/// Newsletter-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    /// Newsletter was not found.
    NotFound(NewsletterId),
    /// Filename was blank.
    EmptyFilename,
    /// File content was empty.
    EmptyContent,
    /// File extension is not `.eml`, `.html`, or `.htm`.
    UnsupportedFileType { filename: String },
    /// File exceeds the upload size limit.
    FileTooLarge { size_bytes: usize, max_bytes: usize },
    /// Infrastructure error.
    Infrastructure(String),
}

impl NewsletterError {
    pub fn not_found(id: NewsletterId) -> Self {
        NewsletterError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        NewsletterError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            NewsletterError::NotFound(_) => ErrorCode::NewsletterNotFound,
            NewsletterError::EmptyFilename
            | NewsletterError::EmptyContent
            | NewsletterError::UnsupportedFileType { .. }
            | NewsletterError::FileTooLarge { .. } => ErrorCode::ValidationFailed,
            NewsletterError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            NewsletterError::NotFound(id) => format!("Newsletter not found: {}", id),
            NewsletterError::EmptyFilename => "Filename cannot be empty".to_string(),
            NewsletterError::EmptyContent => "File content cannot be empty".to_string(),
            NewsletterError::UnsupportedFileType { filename } => {
                format!("Only .eml and .html files are supported: {}", filename)
            }
            NewsletterError::FileTooLarge {
                size_bytes,
                max_bytes,
            } => format!(
                "File size {} bytes exceeds the {} byte limit",
                size_bytes, max_bytes
            ),
            NewsletterError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for NewsletterError {}

impl From<DomainError> for NewsletterError {
    fn from(err: DomainError) -> Self {
        NewsletterError::Infrastructure(err.to_string())
    }
}
