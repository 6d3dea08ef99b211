//! ListDigestsHandler - lists digests, optionally filtered by search term.

use std::sync::Arc;

use crate::domain::digest::{Digest, DigestError};
use crate::ports::DigestRepository;

#[derive(Debug, Clone, Default)]
pub struct ListDigestsQuery {
    /// Case-insensitive substring match against title and source name.
    pub search: Option<String>,
}

pub struct ListDigestsHandler {
    repository: Arc<dyn DigestRepository>,
}

impl ListDigestsHandler {
    pub fn new(repository: Arc<dyn DigestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDigestsQuery) -> Result<Vec<Digest>, DigestError> {
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());

        Ok(self.repository.list(search).await?)
    }
}
