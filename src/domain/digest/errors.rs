//! Digest-specific error types.

use crate::domain::foundation::{DigestId, DomainError, ErrorCode, NewsletterId};

/// Digest-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Digest was not found.
    NotFound(DigestId),
    /// Source newsletter was not found.
    NewsletterNotFound(NewsletterId),
    /// Extracted newsletter text was empty.
    EmptyNewsletterContent(NewsletterId),
    /// AI provider failed to generate the digest.
    Provider(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl DigestError {
    pub fn not_found(id: DigestId) -> Self {
        DigestError::NotFound(id)
    }

    pub fn newsletter_not_found(id: NewsletterId) -> Self {
        DigestError::NewsletterNotFound(id)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        DigestError::Provider(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        DigestError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DigestError::NotFound(_) => ErrorCode::DigestNotFound,
            DigestError::NewsletterNotFound(_) => ErrorCode::NewsletterNotFound,
            DigestError::EmptyNewsletterContent(_) => ErrorCode::ValidationFailed,
            DigestError::Provider(_) => ErrorCode::AiProviderError,
            DigestError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DigestError::NotFound(id) => format!("Digest not found: {}", id),
            DigestError::NewsletterNotFound(id) => format!("Newsletter not found: {}", id),
            DigestError::EmptyNewsletterContent(id) => {
                format!("Newsletter {} has no extractable text", id)
            }
            DigestError::Provider(msg) => format!("AI processing failed: {}", msg),
            DigestError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DigestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DigestError {}

impl From<DomainError> for DigestError {
    fn from(err: DomainError) -> Self {
        DigestError::Infrastructure(err.to_string())
    }
}
