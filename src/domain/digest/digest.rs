//! Digest record entity.
//!
//! A digest is the stored result of processing one newsletter: the AI
//! model's markdown output plus metadata derived from it. The structured
//! view is not stored; it is recovered on read via the markdown parser.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DigestId, NewsletterId, Timestamp};

/// Digest record - the processed result for one newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    /// Unique identifier for this digest.
    id: DigestId,

    /// Newsletter this digest was generated from.
    newsletter_id: NewsletterId,

    /// Digest title, derived from the markdown's first heading.
    title: String,

    /// Newsletter source name, extracted heuristically from the email text.
    source_name: String,

    /// Raw markdown digest as returned by the AI model.
    cleaned_content: String,

    /// When processing completed.
    processed_at: Timestamp,
}

impl Digest {
    /// Creates a new digest for a processed newsletter.
    pub fn new(
        newsletter_id: NewsletterId,
        title: String,
        source_name: String,
        cleaned_content: String,
    ) -> Self {
        Self {
            id: DigestId::new(),
            newsletter_id,
            title,
            source_name,
            cleaned_content,
            processed_at: Timestamp::now(),
        }
    }

    /// Reconstitute a digest from persistence.
    pub fn reconstitute(
        id: DigestId,
        newsletter_id: NewsletterId,
        title: String,
        source_name: String,
        cleaned_content: String,
        processed_at: Timestamp,
    ) -> Self {
        Self {
            id,
            newsletter_id,
            title,
            source_name,
            cleaned_content,
            processed_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the digest ID.
    pub fn id(&self) -> &DigestId {
        &self.id
    }

    /// Returns the source newsletter's ID.
    pub fn newsletter_id(&self) -> &NewsletterId {
        &self.newsletter_id
    }

    /// Returns the digest title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the extracted source name.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the raw markdown digest.
    pub fn cleaned_content(&self) -> &str {
        &self.cleaned_content
    }

    /// Returns the processing timestamp.
    pub fn processed_at(&self) -> &Timestamp {
        &self.processed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_digest_links_to_its_newsletter() {
        let newsletter_id = NewsletterId::new();
        let digest = Digest::new(
            newsletter_id,
            "Weekly Roundup".to_string(),
            "Tech Weekly".to_string(),
            "# Newsletter Digest: Weekly Roundup\n".to_string(),
        );
        assert_eq!(digest.newsletter_id(), &newsletter_id);
        assert_eq!(digest.title(), "Weekly Roundup");
    }
}
