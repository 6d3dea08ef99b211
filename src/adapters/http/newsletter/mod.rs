//! HTTP adapter for the newsletter module.
//!
//! This module exposes newsletter operations via REST endpoints.
//!
//! # Endpoints
//!
//! - `POST /api/newsletters` - Upload a newsletter file
//! - `GET /api/newsletters/{id}` - Fetch a stored newsletter

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::NewsletterAppState;
pub use routes::newsletter_router;
