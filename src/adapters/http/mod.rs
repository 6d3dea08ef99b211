//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod digest;
pub mod newsletter;

// Re-export key types for convenience
pub use digest::digest_router;
pub use digest::DigestAppState;
pub use newsletter::newsletter_router;
pub use newsletter::NewsletterAppState;
