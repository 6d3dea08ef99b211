//! HTTP handlers for newsletter endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::newsletter::{
    GetNewsletterHandler, GetNewsletterQuery, UploadNewsletterCommand, UploadNewsletterHandler,
};
use crate::domain::foundation::NewsletterId;
use crate::domain::newsletter::NewsletterError;
use crate::ports::NewsletterRepository;

use super::dto::{
    ErrorResponse, NewsletterResponse, UploadNewsletterRequest, UploadNewsletterResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct NewsletterAppState {
    pub newsletter_repository: Arc<dyn NewsletterRepository>,
}

impl NewsletterAppState {
    pub fn new(newsletter_repository: Arc<dyn NewsletterRepository>) -> Self {
        Self {
            newsletter_repository,
        }
    }

    pub fn upload_newsletter_handler(&self) -> UploadNewsletterHandler {
        UploadNewsletterHandler::new(self.newsletter_repository.clone())
    }

    pub fn get_newsletter_handler(&self) -> GetNewsletterHandler {
        GetNewsletterHandler::new(self.newsletter_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/newsletters - Upload a newsletter file
pub async fn upload_newsletter(
    State(state): State<NewsletterAppState>,
    Json(request): Json<UploadNewsletterRequest>,
) -> Result<impl IntoResponse, NewsletterApiError> {
    let handler = state.upload_newsletter_handler();
    let cmd = UploadNewsletterCommand {
        filename: request.filename,
        content: request.content,
    };

    let result = handler.handle(cmd).await?;

    let response = UploadNewsletterResponse {
        newsletter_id: result.newsletter.id().to_string(),
        message: "Newsletter uploaded successfully".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/newsletters/:id - Fetch a stored newsletter
pub async fn get_newsletter(
    State(state): State<NewsletterAppState>,
    Path(newsletter_id): Path<String>,
) -> Result<impl IntoResponse, NewsletterApiError> {
    let newsletter_id: NewsletterId = newsletter_id
        .parse()
        .map_err(|_| NewsletterApiError::BadRequest("Invalid newsletter ID format".to_string()))?;

    let handler = state.get_newsletter_handler();
    let newsletter = handler
        .handle(GetNewsletterQuery { newsletter_id })
        .await?;

    Ok(Json(NewsletterResponse::from(&newsletter)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum NewsletterApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<NewsletterError> for NewsletterApiError {
    fn from(err: NewsletterError) -> Self {
        match err {
            NewsletterError::NotFound(id) => NewsletterApiError::NotFound(id.to_string()),
            NewsletterError::Infrastructure(msg) => NewsletterApiError::Internal(msg),
            validation => NewsletterApiError::BadRequest(validation.to_string()),
        }
    }
}

impl IntoResponse for NewsletterApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            NewsletterApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            NewsletterApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Newsletter", &id))
            }
            NewsletterApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use crate::domain::newsletter::Newsletter;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockNewsletterRepository {
        newsletters: Mutex<Vec<Newsletter>>,
    }

    impl MockNewsletterRepository {
        fn new() -> Self {
            Self {
                newsletters: Mutex::new(Vec::new()),
            }
        }
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

    fn test_state() -> NewsletterAppState {
        NewsletterAppState::new(Arc::new(MockNewsletterRepository::new()))
    }

    #[test]
    fn api_error_maps_bad_request_to_400() {
        let err = NewsletterApiError::BadRequest("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_not_found_to_404() {
        let err = NewsletterApiError::NotFound("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_internal_to_500() {
        let err = NewsletterApiError::Internal("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_error_becomes_bad_request() {
        let err: NewsletterApiError = NewsletterError::EmptyFilename.into();
        assert!(matches!(err, NewsletterApiError::BadRequest(_)));
    }

    #[test]
    fn state_creates_handlers() {
        let state = test_state();
        let _ = state.upload_newsletter_handler();
        let _ = state.get_newsletter_handler();
    }
}
