//! Infrastructure adapters implementing application ports

mod groq_completion_adapter;

pub use groq_completion_adapter::GroqCompletionAdapter;
