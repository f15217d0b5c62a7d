//! Groq client implementation
//!
//! Talks to Groq's OpenAI-compatible chat-completions API.

mod client;

pub use client::GroqInferenceEngine;
