//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod ai_provider;
mod content_extractor;
mod digest_repository;
mod newsletter_repository;

pub use ai_provider::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use content_extractor::ContentExtractor;
pub use digest_repository::DigestRepository;
pub use newsletter_repository::NewsletterRepository;
