//! Digest repository port.

use async_trait::async_trait;

use crate::domain::digest::Digest;
use crate::domain::foundation::{DigestId, DomainError};

/// Port for digest persistence and the library view.
#[async_trait]
pub trait DigestRepository: Send + Sync {
    /// Persists a generated digest.
    async fn save(&self, digest: &Digest) -> Result<(), DomainError>;

    /// Loads a digest by ID.
    async fn find_by_id(&self, id: &DigestId) -> Result<Option<Digest>, DomainError>;

    /// Lists digests newest-first, optionally filtered by a
    /// case-insensitive search over title and source name.
    async fn list(&self, search: Option<&str>) -> Result<Vec<Digest>, DomainError>;
}
