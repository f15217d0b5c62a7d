//! Infrastructure layer for StudyScribe
//!
//! Adapters binding the completion engine to the application ports, the
//! fixed-interval retry helper, configuration loading, and telemetry setup.

pub mod adapters;
pub mod config;
pub mod retry;
pub mod telemetry;

pub use adapters::GroqCompletionAdapter;
pub use config::Settings;
pub use retry::{RetryConfig, RetryOutcome, with_retry};
pub use telemetry::{TelemetryConfig, init_tracing};
