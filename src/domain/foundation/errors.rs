//! Error types for the domain layer.

use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    NewsletterNotFound,
    DigestNotFound,

    // External service errors
    AiProviderError,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NewsletterNotFound => "NEWSLETTER_NOT_FOUND",
            ErrorCode::DigestNotFound => "DIGEST_NOT_FOUND",
            ErrorCode::AiProviderError => "AI_PROVIDER_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", name)
    }
}

/// General domain error carrying a code and a human-readable message.
///
/// Repositories and other ports report failures through this type so
/// module-specific errors can classify them without knowing the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    code: ErrorCode,
    message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection refused");
        assert_eq!(err.to_string(), "DATABASE_ERROR: connection refused");
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn error_codes_render_screaming_snake() {
        assert_eq!(ErrorCode::NewsletterNotFound.to_string(), "NEWSLETTER_NOT_FOUND");
        assert_eq!(ErrorCode::AiProviderError.to_string(), "AI_PROVIDER_ERROR");
    }
}
