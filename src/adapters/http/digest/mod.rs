//! HTTP adapter for the digest module.
//!
//! This module exposes digest operations via REST endpoints.
//!
//! # Endpoints
//!
//! - `POST /api/newsletters/{id}/process` - Run the digest pipeline
//! - `GET /api/digests` - List digests with optional search
//! - `GET /api/digests/{id}` - Fetch a digest with parsed sections

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::DigestAppState;
pub use routes::digest_router;
