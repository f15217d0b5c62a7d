//! AI Core - chat-completion client for the hosted language-model service
//!
//! Provides a single-attempt client for Groq's OpenAI-compatible
//! chat-completions API. Retry policy lives with the callers in the
//! infrastructure layer; this crate only knows how to make one request.

pub mod config;
pub mod error;
pub mod groq;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use groq::GroqInferenceEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};
