//! AI adapters - completion provider implementations.

mod mock_provider;
mod openai_provider;

pub use mock_provider::MockAiProvider;
pub use openai_provider::{OpenAiConfig, OpenAiProvider};
