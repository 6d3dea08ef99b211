//! HTTP DTOs (Data Transfer Objects) for newsletter endpoints.
//!
//! These types define the JSON request/response structure for the newsletter
//! API. They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::newsletter::Newsletter;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to upload a newsletter file.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadNewsletterRequest {
    /// Original filename, including extension.
    pub filename: String,
    /// Raw file content (.eml or HTML text).
    pub content: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a stored newsletter.
#[derive(Debug, Clone, Serialize)]
pub struct NewsletterResponse {
    /// Newsletter ID.
    pub id: String,
    /// Original filename.
    pub filename: String,
    /// Detected file type (`eml` or `html`).
    pub file_type: String,
    /// Raw content size in bytes.
    pub size_bytes: usize,
    /// When the file was uploaded (ISO 8601).
    pub uploaded_at: String,
}

impl From<&Newsletter> for NewsletterResponse {
    fn from(newsletter: &Newsletter) -> Self {
        Self {
            id: newsletter.id().to_string(),
            filename: newsletter.filename().to_string(),
            file_type: newsletter.file_type().as_str().to_string(),
            size_bytes: newsletter.size_bytes(),
            uploaded_at: newsletter.uploaded_at().to_string(),
        }
    }
}

/// Response for upload commands.
#[derive(Debug, Clone, Serialize)]
pub struct UploadNewsletterResponse {
    /// The newly assigned newsletter ID.
    pub newsletter_id: String,
    /// Success message.
    pub message: String,
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource, id),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_request_deserializes() {
        let json = r#"{"filename": "weekly.eml", "content": "From: a@b.c\n\nHi"}"#;
        let req: UploadNewsletterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.filename, "weekly.eml");
    }

    #[test]
    fn newsletter_response_serializes_to_json() {
        let newsletter =
            Newsletter::new("weekly.eml".to_string(), "body".to_string()).unwrap();
        let response = NewsletterResponse::from(&newsletter);
        let json = serde_json::to_string(&response).expect("serialization failed");

        assert!(json.contains("\"filename\":\"weekly.eml\""));
        assert!(json.contains("\"file_type\":\"eml\""));
    }

    #[test]
    fn error_response_not_found_formats_correctly() {
        let err = ErrorResponse::not_found("Newsletter", "abc-123");
        assert_eq!(err.code, "NOT_FOUND");
        assert!(err.message.contains("Newsletter"));
        assert!(err.message.contains("abc-123"));
    }
}
