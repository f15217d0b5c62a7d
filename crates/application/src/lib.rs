//! Application layer - use cases and orchestration
//!
//! Contains the prompt compiler, the response normalizer, port definitions,
//! and the services exposing the three study-material entry points.

pub mod error;
pub mod normalizer;
pub mod ports;
pub mod prompts;
pub mod services;

pub use error::PipelineError;
pub use ports::*;
pub use prompts::{PromptSpec, UseCase};
pub use services::*;
