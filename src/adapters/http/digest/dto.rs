//! HTTP DTOs (Data Transfer Objects) for digest endpoints.
//!
//! These types define the JSON request/response structure for the digest API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::digest::{Digest, DigestTheme, ParsedDigest};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for listing digests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDigestsParams {
    /// Case-insensitive substring filter on title and source name.
    pub search: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Summary response for digest lists.
#[derive(Debug, Clone, Serialize)]
pub struct DigestSummaryResponse {
    /// Digest ID.
    pub id: String,
    /// Newsletter the digest was produced from.
    pub newsletter_id: String,
    /// Digest title.
    pub title: String,
    /// Detected newsletter source.
    pub source_name: String,
    /// When processing finished (ISO 8601).
    pub processed_at: String,
}

impl From<&Digest> for DigestSummaryResponse {
    fn from(digest: &Digest) -> Self {
        Self {
            id: digest.id().to_string(),
            newsletter_id: digest.newsletter_id().to_string(),
            title: digest.title().to_string(),
            source_name: digest.source_name().to_string(),
            processed_at: digest.processed_at().to_string(),
        }
    }
}

/// Full digest response: the stored record plus its structured view.
#[derive(Debug, Clone, Serialize)]
pub struct DigestResponse {
    /// Digest ID.
    pub id: String,
    /// Newsletter the digest was produced from.
    pub newsletter_id: String,
    /// Digest title.
    pub title: String,
    /// Detected newsletter source.
    pub source_name: String,
    /// The raw markdown digest.
    pub cleaned_content: String,
    /// When processing finished (ISO 8601).
    pub processed_at: String,
    /// Structured sections parsed from the markdown.
    pub parsed: ParsedDigestResponse,
}

impl DigestResponse {
    pub fn from_parts(digest: &Digest, parsed: ParsedDigest) -> Self {
        Self {
            id: digest.id().to_string(),
            newsletter_id: digest.newsletter_id().to_string(),
            title: digest.title().to_string(),
            source_name: digest.source_name().to_string(),
            cleaned_content: digest.cleaned_content().to_string(),
            processed_at: digest.processed_at().to_string(),
            parsed: ParsedDigestResponse::from(parsed),
        }
    }
}

/// Structured digest sections.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedDigestResponse {
    pub title: String,
    pub executive_summary: String,
    pub themes: Vec<DigestThemeResponse>,
    pub notable_quotes: Vec<String>,
    pub action_items: Vec<String>,
    pub source_info: String,
}

impl From<ParsedDigest> for ParsedDigestResponse {
    fn from(parsed: ParsedDigest) -> Self {
        Self {
            title: parsed.title,
            executive_summary: parsed.executive_summary,
            themes: parsed
                .themes
                .into_iter()
                .map(DigestThemeResponse::from)
                .collect(),
            notable_quotes: parsed.notable_quotes,
            action_items: parsed.action_items,
            source_info: parsed.source_info,
        }
    }
}

/// A single theme within a digest.
#[derive(Debug, Clone, Serialize)]
pub struct DigestThemeResponse {
    pub title: String,
    pub summary: String,
    pub details: Vec<String>,
}

impl From<DigestTheme> for DigestThemeResponse {
    fn from(theme: DigestTheme) -> Self {
        Self {
            title: theme.title,
            summary: theme.summary,
            details: theme.details,
        }
    }
}

/// Response for the process command.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessNewsletterResponse {
    /// The newly created digest ID.
    pub digest_id: String,
    /// The extracted digest title.
    pub title: String,
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

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            code: "AI_PROVIDER_ERROR".to_string(),
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
    use crate::domain::foundation::NewsletterId;

    #[test]
    fn digest_response_serializes_parsed_sections() {
        let digest = Digest::new(
            NewsletterId::new(),
            "Weekly".to_string(),
            "AI Weekly".to_string(),
            "# Newsletter Digest: Weekly\n".to_string(),
        );
        let parsed = ParsedDigest {
            title: "Weekly".to_string(),
            executive_summary: "Brief.".to_string(),
            themes: vec![DigestTheme {
                title: "Models".to_string(),
                summary: "New releases".to_string(),
                details: vec!["Release A".to_string()],
            }],
            notable_quotes: vec!["quoted".to_string()],
            action_items: vec!["read".to_string()],
            source_info: "- **Source**: AI Weekly".to_string(),
        };

        let response = DigestResponse::from_parts(&digest, parsed);
        let json = serde_json::to_string(&response).expect("serialization failed");

        assert!(json.contains("\"executive_summary\":\"Brief.\""));
        assert!(json.contains("\"themes\":[{\"title\":\"Models\""));
    }

    #[test]
    fn list_params_deserialize_without_search() {
        let params: ListDigestsParams = serde_json::from_str("{}").unwrap();
        assert!(params.search.is_none());
    }
}
