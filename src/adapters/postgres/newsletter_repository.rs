//! PostgreSQL implementation of NewsletterRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, NewsletterId, Timestamp};
use crate::domain::newsletter::{Newsletter, NewsletterFileType};
use crate::ports::NewsletterRepository;

/// PostgreSQL implementation of NewsletterRepository.
#[derive(Clone)]
pub struct PostgresNewsletterRepository {
    pool: PgPool,
}

impl PostgresNewsletterRepository {
    /// Creates a new PostgresNewsletterRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn save(&self, newsletter: &Newsletter) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO newsletters (
                id, filename, file_type, file_content, uploaded_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(newsletter.id().as_uuid())
        .bind(newsletter.filename())
        .bind(newsletter.file_type().as_str())
        .bind(newsletter.file_content())
        .bind(newsletter.uploaded_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert newsletter: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &NewsletterId) -> Result<Option<Newsletter>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, filename, file_type, file_content, uploaded_at
            FROM newsletters
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch newsletter: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_newsletter(row)?)),
            None => Ok(None),
        }
    }
}

/// Maps a database row to a Newsletter aggregate.
fn row_to_newsletter(row: sqlx::postgres::PgRow) -> Result<Newsletter, DomainError> {
    let file_type = file_type_from_str(row.get("file_type"))?;

    Ok(Newsletter::reconstitute(
        NewsletterId::from_uuid(row.get("id")),
        row.get("filename"),
        file_type,
        row.get("file_content"),
        Timestamp::from_datetime(row.get("uploaded_at")),
    ))
}

/// Parses the stored file type column.
fn file_type_from_str(value: &str) -> Result<NewsletterFileType, DomainError> {
    match value {
        "eml" => Ok(NewsletterFileType::Eml),
        "html" => Ok(NewsletterFileType::Html),
        other => Err(DomainError::new(
            ErrorCode::InternalError,
            format!("Unknown newsletter file type in database: {}", other),
        )),
    }
}
