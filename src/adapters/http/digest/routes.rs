//! Route configuration for digest endpoints.
//!
//! Configures Axum router with digest-related routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_digest, list_digests, process_newsletter, DigestAppState};

/// Creates the digest router with all endpoints.
///
/// Routes:
/// - `POST /api/newsletters/:id/process` - Run the digest pipeline
/// - `GET /api/digests` - List digests (`?search=` filters by title/source)
/// - `GET /api/digests/:id` - Fetch a digest with parsed sections
pub fn digest_router() -> Router<DigestAppState> {
    Router::new()
        .route("/api/newsletters/:id/process", post(process_newsletter))
        .route("/api/digests", get(list_digests))
        .route("/api/digests/:id", get(get_digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiProvider;
    use crate::adapters::email::EmlContentExtractor;
    use crate::domain::digest::Digest;
    use crate::domain::foundation::{DigestId, DomainError, NewsletterId};
    use crate::domain::newsletter::Newsletter;
    use crate::ports::{DigestRepository, NewsletterRepository};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct MockNewsletterRepository {
        newsletters: Mutex<Vec<Newsletter>>,
    }

    #[async_trait]
    impl NewsletterRepository for MockNewsletterRepository {
        async fn save(&self, newsletter: &Newsletter) -> Result<(), DomainError> {
            self.newsletters.lock().unwrap().push(newsletter.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &NewsletterId,
        ) -> Result<Option<Newsletter>, DomainError> {
            Ok(self
                .newsletters
                .lock()
                .unwrap()
                .iter()
                .find(|n| n.id() == id)
                .cloned())
        }
    }

    struct MockDigestRepository {
        digests: Mutex<Vec<Digest>>,
    }

    #[async_trait]
    impl DigestRepository for MockDigestRepository {
        async fn save(&self, digest: &Digest) -> Result<(), DomainError> {
            self.digests.lock().unwrap().push(digest.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &DigestId) -> Result<Option<Digest>, DomainError> {
            Ok(self
                .digests
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id() == id)
                .cloned())
        }

        async fn list(&self, search: Option<&str>) -> Result<Vec<Digest>, DomainError> {
            let digests = self.digests.lock().unwrap();
            Ok(match search {
                Some(term) => {
                    let needle = term.to_lowercase();
                    digests
                        .iter()
                        .filter(|d| {
                            d.title().to_lowercase().contains(&needle)
                                || d.source_name().to_lowercase().contains(&needle)
                        })
                        .cloned()
                        .collect()
                }
                None => digests.clone(),
            })
        }
    }

    fn state_with(
        newsletters: Vec<Newsletter>,
        digests: Vec<Digest>,
    ) -> DigestAppState {
        DigestAppState::new(
            Arc::new(MockNewsletterRepository {
                newsletters: Mutex::new(newsletters),
            }),
            Arc::new(MockDigestRepository {
                digests: Mutex::new(digests),
            }),
            Arc::new(EmlContentExtractor::new()),
            Arc::new(MockAiProvider::with_response(
                "# Newsletter Digest: Weekly\n\n## Executive Summary\nBrief.\n",
            )),
        )
    }

    fn sample_digest(title: &str, source: &str) -> Digest {
        Digest::new(
            NewsletterId::new(),
            title.to_string(),
            source.to_string(),
            format!("# Newsletter Digest: {title}\n"),
        )
    }

    #[tokio::test]
    async fn process_endpoint_creates_digest() {
        let newsletter = Newsletter::new(
            "weekly.eml".to_string(),
            "From: AI Weekly <news@example.com>\n\nContent here.\n".to_string(),
        )
        .unwrap();
        let id = *newsletter.id();
        let app = digest_router().with_state(state_with(vec![newsletter], Vec::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/newsletters/{}/process", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn process_endpoint_returns_404_for_unknown_newsletter() {
        let app = digest_router().with_state(state_with(Vec::new(), Vec::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/newsletters/{}/process", NewsletterId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_endpoint_applies_search_filter() {
        let digests = vec![
            sample_digest("AI Weekly Roundup", "AI Weekly"),
            sample_digest("Cooking Tips", "Kitchen Monthly"),
        ];
        let app = digest_router().with_state(state_with(Vec::new(), digests));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/digests?search=weekly")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["title"], "AI Weekly Roundup");
    }

    #[tokio::test]
    async fn get_endpoint_returns_digest_with_parsed_view() {
        let digest = sample_digest("Weekly", "AI Weekly");
        let id = *digest.id();
        let app = digest_router().with_state(state_with(Vec::new(), vec![digest]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/digests/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["parsed"]["title"], "Weekly");
    }
}
