//! HTTP handlers for digest endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::digest::{
    GetDigestHandler, GetDigestQuery, ListDigestsHandler, ListDigestsQuery,
    ProcessNewsletterCommand, ProcessNewsletterHandler,
};
use crate::domain::digest::DigestError;
use crate::domain::foundation::{DigestId, NewsletterId};
use crate::ports::{AiProvider, ContentExtractor, DigestRepository, NewsletterRepository};

use super::dto::{
    DigestResponse, DigestSummaryResponse, ErrorResponse, ListDigestsParams,
    ProcessNewsletterResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct DigestAppState {
    pub newsletter_repository: Arc<dyn NewsletterRepository>,
    pub digest_repository: Arc<dyn DigestRepository>,
    pub content_extractor: Arc<dyn ContentExtractor>,
    pub ai_provider: Arc<dyn AiProvider>,
}

impl DigestAppState {
    pub fn new(
        newsletter_repository: Arc<dyn NewsletterRepository>,
        digest_repository: Arc<dyn DigestRepository>,
        content_extractor: Arc<dyn ContentExtractor>,
        ai_provider: Arc<dyn AiProvider>,
    ) -> Self {
        Self {
            newsletter_repository,
            digest_repository,
            content_extractor,
            ai_provider,
        }
    }

    pub fn process_newsletter_handler(&self) -> ProcessNewsletterHandler {
        ProcessNewsletterHandler::new(
            self.newsletter_repository.clone(),
            self.digest_repository.clone(),
            self.content_extractor.clone(),
            self.ai_provider.clone(),
        )
    }

    pub fn get_digest_handler(&self) -> GetDigestHandler {
        GetDigestHandler::new(self.digest_repository.clone())
    }

    pub fn list_digests_handler(&self) -> ListDigestsHandler {
        ListDigestsHandler::new(self.digest_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/newsletters/:id/process - Run the digest pipeline
pub async fn process_newsletter(
    State(state): State<DigestAppState>,
    Path(newsletter_id): Path<String>,
) -> Result<impl IntoResponse, DigestApiError> {
    let newsletter_id: NewsletterId = newsletter_id
        .parse()
        .map_err(|_| DigestApiError::BadRequest("Invalid newsletter ID format".to_string()))?;

    let handler = state.process_newsletter_handler();
    let result = handler
        .handle(ProcessNewsletterCommand { newsletter_id })
        .await?;

    let response = ProcessNewsletterResponse {
        digest_id: result.digest.id().to_string(),
        title: result.digest.title().to_string(),
        message: "Newsletter processed successfully".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/digests - List digests, optionally filtered by `?search=`
pub async fn list_digests(
    State(state): State<DigestAppState>,
    Query(params): Query<ListDigestsParams>,
) -> Result<impl IntoResponse, DigestApiError> {
    let handler = state.list_digests_handler();
    let digests = handler
        .handle(ListDigestsQuery {
            search: params.search,
        })
        .await?;

    let response: Vec<DigestSummaryResponse> =
        digests.iter().map(DigestSummaryResponse::from).collect();

    Ok(Json(response))
}

/// GET /api/digests/:id - Fetch a digest with its parsed sections
pub async fn get_digest(
    State(state): State<DigestAppState>,
    Path(digest_id): Path<String>,
) -> Result<impl IntoResponse, DigestApiError> {
    let digest_id: DigestId = digest_id
        .parse()
        .map_err(|_| DigestApiError::BadRequest("Invalid digest ID format".to_string()))?;

    let handler = state.get_digest_handler();
    let view = handler.handle(GetDigestQuery { digest_id }).await?;

    Ok(Json(DigestResponse::from_parts(&view.digest, view.parsed)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum DigestApiError {
    BadRequest(String),
    NotFound { resource: &'static str, id: String },
    BadGateway(String),
    Internal(String),
}

impl From<DigestError> for DigestApiError {
    fn from(err: DigestError) -> Self {
        match err {
            DigestError::NotFound(id) => DigestApiError::NotFound {
                resource: "Digest",
                id: id.to_string(),
            },
            DigestError::NewsletterNotFound(id) => DigestApiError::NotFound {
                resource: "Newsletter",
                id: id.to_string(),
            },
            err @ DigestError::EmptyNewsletterContent(_) => {
                DigestApiError::BadRequest(err.to_string())
            }
            DigestError::Provider(msg) => DigestApiError::BadGateway(msg),
            DigestError::Infrastructure(msg) => DigestApiError::Internal(msg),
        }
    }
}

impl IntoResponse for DigestApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DigestApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DigestApiError::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(resource, &id))
            }
            DigestApiError::BadGateway(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway(msg))
            }
            DigestApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
