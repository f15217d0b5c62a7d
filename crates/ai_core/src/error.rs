//! Inference errors

use thiserror::Error;

/// Errors that can occur during a completion attempt
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the completion service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the completion service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Completion service returned a non-success status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Response envelope could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Attempt exceeded its timeout
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// All retry attempts were used up; distinct from any single attempt's
    /// failure so callers can tell a terminal outcome from a transient one
    #[error("Completion failed after {attempts} attempts: {last}")]
    AttemptsExhausted {
        attempts: u32,
        #[source]
        last: Box<InferenceError>,
    },
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(0)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
