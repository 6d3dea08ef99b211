//! NewsDigest server binary.
//!
//! Wires configuration, the Postgres pool, adapters, and the Axum routers
//! together and serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use newsdigest::adapters::ai::{OpenAiConfig, OpenAiProvider};
use newsdigest::adapters::email::EmlContentExtractor;
use newsdigest::adapters::http::{
    digest_router, newsletter_router, DigestAppState, NewsletterAppState,
};
use newsdigest::adapters::postgres::{PostgresDigestRepository, PostgresNewsletterRepository};
use newsdigest::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "Starting NewsDigest server"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let newsletter_repository = Arc::new(PostgresNewsletterRepository::new(pool.clone()));
    let digest_repository = Arc::new(PostgresDigestRepository::new(pool));
    let content_extractor = Arc::new(EmlContentExtractor::new());

    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .ok_or("OpenAI API key not configured")?;
    let ai_provider = Arc::new(OpenAiProvider::new(
        OpenAiConfig::new(api_key)
            .with_model(config.ai.model.clone())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?);

    let newsletter_state = NewsletterAppState::new(newsletter_repository.clone());
    let digest_state = DigestAppState::new(
        newsletter_repository,
        digest_repository,
        content_extractor,
        ai_provider,
    );

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .merge(newsletter_router().with_state(newsletter_state))
        .merge(digest_router().with_state(digest_state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(DefaultBodyLimit::max(config.upload.max_body_bytes))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
