//! Mock AI provider for tests and local development.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Mock provider returning a fixed response, recording requests.
pub struct MockAiProvider {
    response: Mutex<Result<String, AiError>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockAiProvider {
    /// Creates a mock that answers every request with `content`.
    pub fn with_response(content: impl Into<String>) -> Self {
        Self {
            response: Mutex::new(Ok(content.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock that fails every request with `error`.
    pub fn failing(error: AiError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.requests.lock().unwrap().push(request);

        match &*self.response.lock().unwrap() {
            Ok(content) => Ok(CompletionResponse {
                content: content.clone(),
                usage: TokenUsage::new(100, 200),
                model: "mock".to_string(),
                finish_reason: FinishReason::Stop,
            }),
            Err(err) => Err(err.clone()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock")
    }
}
