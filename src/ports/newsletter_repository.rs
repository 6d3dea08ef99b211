//! Newsletter repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, NewsletterId};
use crate::domain::newsletter::Newsletter;

/// Port for newsletter persistence.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Persists a newly uploaded newsletter.
    async fn save(&self, newsletter: &Newsletter) -> Result<(), DomainError>;

    /// Loads a newsletter by ID.
    async fn find_by_id(&self, id: &NewsletterId) -> Result<Option<Newsletter>, DomainError>;
}
