//! Route configuration for newsletter endpoints.
//!
//! Configures Axum router with newsletter-related routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_newsletter, upload_newsletter, NewsletterAppState};

/// Creates the newsletter router with all endpoints.
///
/// Routes:
/// - `POST /api/newsletters` - Upload a newsletter file
/// - `GET /api/newsletters/:id` - Fetch a stored newsletter
pub fn newsletter_router() -> Router<NewsletterAppState> {
    Router::new()
        .route("/api/newsletters", post(upload_newsletter))
        .route("/api/newsletters/:id", get(get_newsletter))
}
