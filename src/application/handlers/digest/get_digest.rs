//! GetDigestHandler - fetches a digest and parses its markdown for display.

use std::sync::Arc;

use crate::domain::digest::{Digest, DigestError, DigestMarkdownParser, ParsedDigest};
use crate::domain::foundation::DigestId;
use crate::ports::DigestRepository;

#[derive(Debug, Clone)]
pub struct GetDigestQuery {
    pub digest_id: DigestId,
}

/// A digest record together with its structured view.
#[derive(Debug, Clone)]
pub struct DigestView {
    pub digest: Digest,
    pub parsed: ParsedDigest,
}

pub struct GetDigestHandler {
    repository: Arc<dyn DigestRepository>,
    parser: DigestMarkdownParser,
}

impl GetDigestHandler {
    pub fn new(repository: Arc<dyn DigestRepository>) -> Self {
        Self {
            repository,
            parser: DigestMarkdownParser::new(),
        }
    }

    pub async fn handle(&self, query: GetDigestQuery) -> Result<DigestView, DigestError> {
        let digest = self
            .repository
            .find_by_id(&query.digest_id)
            .await?
            .ok_or_else(|| DigestError::not_found(query.digest_id))?;

        // Parsing is total: malformed markdown yields empty sections, not errors.
        let parsed = self.parser.parse(digest.cleaned_content());

        Ok(DigestView { digest, parsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, NewsletterId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockDigestRepository {
        stored: Mutex<Option<Digest>>,
    }

    #[async_trait]
    impl DigestRepository for MockDigestRepository {
        async fn save(&self, digest: &Digest) -> Result<(), DomainError> {
            *self.stored.lock().unwrap() = Some(digest.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &DigestId) -> Result<Option<Digest>, DomainError> {
            let stored = self.stored.lock().unwrap();
            Ok(stored.clone().filter(|d| d.id() == id))
        }

        async fn list(&self, _search: Option<&str>) -> Result<Vec<Digest>, DomainError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn returns_digest_with_parsed_sections() {
        let markdown = "# Newsletter Digest: Weekly\n\n\
            ## Executive Summary\nThe week in brief.\n\n\
            ## Action Items & Takeaways\n- Read the paper\n";
        let digest = Digest::new(
            NewsletterId::new(),
            "Weekly".to_string(),
            "AI Weekly".to_string(),
            markdown.to_string(),
        );
        let id = *digest.id();
        let handler = GetDigestHandler::new(Arc::new(MockDigestRepository {
            stored: Mutex::new(Some(digest)),
        }));

        let view = handler.handle(GetDigestQuery { digest_id: id }).await.unwrap();

        assert_eq!(view.parsed.title, "Weekly");
        assert_eq!(view.parsed.executive_summary, "The week in brief.");
        assert_eq!(view.parsed.action_items, vec!["Read the paper"]);
    }

    #[tokio::test]
    async fn missing_digest_is_not_found() {
        let handler = GetDigestHandler::new(Arc::new(MockDigestRepository {
            stored: Mutex::new(None),
        }));

        let err = handler
            .handle(GetDigestQuery {
                digest_id: DigestId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DigestError::NotFound(_)));
    }
}
