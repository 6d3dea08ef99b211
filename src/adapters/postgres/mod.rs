//! PostgreSQL adapters - repository implementations backed by sqlx.

mod digest_repository;
mod newsletter_repository;

pub use digest_repository::PostgresDigestRepository;
pub use newsletter_repository::PostgresNewsletterRepository;
