//! Completion port - interface to the resilient completion client
//!
//! The implementation owns the retry policy: a call either returns raw
//! reply text or a terminal failure, never an intermediate attempt error.

use async_trait::async_trait;

use crate::error::PipelineError;
use crate::prompts::PromptSpec;

/// Result of a successful completion call
#[derive(Debug, Clone)]
pub struct CompletionResult {
    /// Raw reply text, expected to parse as JSON when the prompt asked
    pub content: String,
    /// Model that generated the reply
    pub model: String,
    /// Number of tokens used (if reported)
    pub tokens_used: Option<u32>,
    /// Wall-clock latency across all attempts in milliseconds
    pub latency_ms: u64,
}

/// Port for completion operations
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send a compiled prompt and return the reply text or a terminal failure
    async fn complete(&self, prompt: &PromptSpec) -> Result<CompletionResult, PipelineError>;

    /// Check if the completion backend is reachable
    async fn is_healthy(&self) -> bool;

    /// Identifier of the model behind this port
    fn model_name(&self) -> String;
}
