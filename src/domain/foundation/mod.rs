//! Foundation - shared value objects for the domain layer.
//!
//! Typed identifiers, timestamps, and error types used across modules.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{DigestId, NewsletterId};
pub use timestamp::Timestamp;
