//! PostgreSQL implementation of DigestRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::digest::Digest;
use crate::domain::foundation::{DigestId, DomainError, ErrorCode, NewsletterId, Timestamp};
use crate::ports::DigestRepository;

/// PostgreSQL implementation of DigestRepository.
#[derive(Clone)]
pub struct PostgresDigestRepository {
    pool: PgPool,
}

impl PostgresDigestRepository {
    /// Creates a new PostgresDigestRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DigestRepository for PostgresDigestRepository {
    async fn save(&self, digest: &Digest) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO digests (
                id, newsletter_id, title, source_name, cleaned_content, processed_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(digest.id().as_uuid())
        .bind(digest.newsletter_id().as_uuid())
        .bind(digest.title())
        .bind(digest.source_name())
        .bind(digest.cleaned_content())
        .bind(digest.processed_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert digest: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &DigestId) -> Result<Option<Digest>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, newsletter_id, title, source_name, cleaned_content, processed_at
            FROM digests
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch digest: {}", e),
            )
        })?;

        Ok(row.map(row_to_digest))
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Digest>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, newsletter_id, title, source_name, cleaned_content, processed_at
            FROM digests
            WHERE $1::text IS NULL
               OR title ILIKE '%' || $1 || '%'
               OR source_name ILIKE '%' || $1 || '%'
            ORDER BY processed_at DESC
            "#,
        )
        .bind(search)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list digests: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(row_to_digest).collect())
    }
}

/// Maps a database row to a Digest record.
fn row_to_digest(row: sqlx::postgres::PgRow) -> Digest {
    Digest::reconstitute(
        DigestId::from_uuid(row.get("id")),
        NewsletterId::from_uuid(row.get("newsletter_id")),
        row.get("title"),
        row.get("source_name"),
        row.get("cleaned_content"),
        Timestamp::from_datetime(row.get("processed_at")),
    )
}
