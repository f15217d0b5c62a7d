//! Groq completion adapter - implements `CompletionPort` using `ai_core`
//!
//! This is the resilient half of the completion client: it wraps the
//! single-attempt engine in the fixed-interval retry loop and converts an
//! exhausted run into the terminal `UpstreamUnavailable` outcome.

use std::time::Instant;

use ai_core::{
    GroqInferenceEngine, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest,
};
use application::{
    error::PipelineError,
    ports::{CompletionPort, CompletionResult},
    prompts::PromptSpec,
};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::retry::{RetryConfig, with_retry};

/// Adapter for Groq's OpenAI-compatible completion service
#[derive(Debug)]
pub struct GroqCompletionAdapter {
    engine: GroqInferenceEngine,
    retry: RetryConfig,
}

impl GroqCompletionAdapter {
    /// Create a new adapter with explicit configurations
    pub fn new(inference: InferenceConfig, retry: RetryConfig) -> Result<Self, InferenceError> {
        let engine = GroqInferenceEngine::new(inference)?;
        Ok(Self { engine, retry })
    }

    /// Create an adapter from loaded settings
    pub fn from_settings(settings: &crate::config::Settings) -> Result<Self, InferenceError> {
        Self::new(settings.inference.clone(), settings.retry.clone())
    }

    /// Build the engine request for a compiled prompt
    fn request_for(prompt: &PromptSpec) -> InferenceRequest {
        let request = InferenceRequest::with_system(prompt.system, prompt.user.clone());
        if prompt.expects_json {
            request.expecting_json()
        } else {
            request
        }
    }
}

#[async_trait]
impl CompletionPort for GroqCompletionAdapter {
    #[instrument(skip(self, prompt), fields(use_case = prompt.use_case.as_str(), prompt_len = prompt.user.len()))]
    async fn complete(&self, prompt: &PromptSpec) -> Result<CompletionResult, PipelineError> {
        let start = Instant::now();

        let outcome = with_retry(&self.retry, || {
            let request = Self::request_for(prompt);
            async move { self.engine.generate(request).await }
        })
        .await;

        let attempts = outcome.attempts;
        match outcome.result {
            Ok(response) => {
                #[allow(clippy::cast_possible_truncation)]
                let latency_ms = start.elapsed().as_millis() as u64;

                debug!(
                    model = %response.model,
                    tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
                    attempts,
                    latency_ms,
                    "Completion succeeded"
                );

                Ok(CompletionResult {
                    content: response.content,
                    model: response.model,
                    tokens_used: response.usage.map(|u| u.total_tokens),
                    latency_ms,
                })
            },
            Err(err) => {
                let terminal = InferenceError::AttemptsExhausted {
                    attempts,
                    last: Box::new(err),
                };
                warn!(error = %terminal, "Completion terminally failed");
                Err(PipelineError::UpstreamUnavailable { attempts })
            },
        }
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn model_name(&self) -> String {
        self.engine.default_model().to_string()
    }
}
