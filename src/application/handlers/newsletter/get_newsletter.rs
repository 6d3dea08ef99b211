//! GetNewsletterHandler - query handler for fetching a newsletter by id.

use std::sync::Arc;

use crate::domain::foundation::NewsletterId;
use crate::domain::newsletter::{Newsletter, NewsletterError};
use crate::ports::NewsletterRepository;

#[derive(Debug, Clone)]
pub struct GetNewsletterQuery {
    pub newsletter_id: NewsletterId,
}

pub struct GetNewsletterHandler {
    repository: Arc<dyn NewsletterRepository>,
}

impl GetNewsletterHandler {
    pub fn new(repository: Arc<dyn NewsletterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetNewsletterQuery) -> Result<Newsletter, NewsletterError> {
        self.repository
            .find_by_id(&query.newsletter_id)
            .await?
            .ok_or_else(|| NewsletterError::not_found(query.newsletter_id))
    }
}
