//! UploadNewsletterHandler - command handler for newsletter uploads.

use std::sync::Arc;

use crate::domain::newsletter::{Newsletter, NewsletterError};
use crate::ports::NewsletterRepository;

/// Command to upload a newsletter file.
#[derive(Debug, Clone)]
pub struct UploadNewsletterCommand {
    pub filename: String,
    pub content: String,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadNewsletterResult {
    pub newsletter: Newsletter,
}

/// Handler for newsletter uploads.
pub struct UploadNewsletterHandler {
    repository: Arc<dyn NewsletterRepository>,
}

impl UploadNewsletterHandler {
    pub fn new(repository: Arc<dyn NewsletterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UploadNewsletterCommand,
    ) -> Result<UploadNewsletterResult, NewsletterError> {
        // Validation (format, size) lives in the aggregate constructor.
        let newsletter = Newsletter::new(cmd.filename, cmd.content)?;

        self.repository.save(&newsletter).await?;

        tracing::info!(
            newsletter_id = %newsletter.id(),
            filename = newsletter.filename(),
            size_bytes = newsletter.size_bytes(),
            "Newsletter uploaded"
        );

        Ok(UploadNewsletterResult { newsletter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, NewsletterId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockNewsletterRepository {
        saved: Mutex<Vec<Newsletter>>,
        fail_save: bool,
    }

    impl MockNewsletterRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }
    }

    #[async_trait]
    impl NewsletterRepository for MockNewsletterRepository {
        async fn save(&self, newsletter: &Newsletter) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::new(ErrorCode::DatabaseError, "save failed"));
            }
            self.saved.lock().unwrap().push(newsletter.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &NewsletterId,
        ) -> Result<Option<Newsletter>, DomainError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn upload_persists_valid_newsletter() {
        let repository = Arc::new(MockNewsletterRepository::new());
        let handler = UploadNewsletterHandler::new(repository.clone());

        let result = handler
            .handle(UploadNewsletterCommand {
                filename: "weekly.eml".to_string(),
                content: "From: a@b.c\n\nBody".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.newsletter.filename(), "weekly.eml");
        assert_eq!(repository.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upload_rejects_unsupported_file_without_touching_repository() {
        let repository = Arc::new(MockNewsletterRepository::new());
        let handler = UploadNewsletterHandler::new(repository.clone());

        let err = handler
            .handle(UploadNewsletterCommand {
                filename: "notes.txt".to_string(),
                content: "text".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, NewsletterError::UnsupportedFileType { .. }));
        assert!(repository.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upload_surfaces_repository_failure() {
        let handler = UploadNewsletterHandler::new(Arc::new(MockNewsletterRepository::failing()));

        let err = handler
            .handle(UploadNewsletterCommand {
                filename: "a.eml".to_string(),
                content: "x".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, NewsletterError::Infrastructure(_)));
    }
}
