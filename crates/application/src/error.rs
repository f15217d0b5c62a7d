//! Application-level errors
//!
//! Every failure the pipeline can produce is one of these kinds; nothing
//! escapes a service boundary as a panic or an unclassified fault.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the study pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Every completion attempt failed; the upstream service is unreachable
    #[error("AI service unavailable after {attempts} attempts")]
    UpstreamUnavailable { attempts: u32 },

    /// The model reply was not valid structured data
    #[error("Malformed AI reply: {0}")]
    MalformedUpstreamResponse(String),

    /// The quiz reply was missing questions or had the wrong shape
    #[error("Quiz reply was empty or malformed")]
    EmptyOrMalformedQuiz,

    /// Caller input was missing or invalid; detected before any network call
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// Speech-to-text collaborator failed
    #[error("Transcription failed: {0}")]
    Transcription(String),

    /// Caller-identity collaborator rejected the credential
    #[error("Not authorized: {0}")]
    NotAuthorized(String),
}

impl PipelineError {
    /// Stable, user-safe message for this error kind
    ///
    /// Internal detail stays in logs; this is the only string surface that
    /// may reach a caller verbatim.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::UpstreamUnavailable { .. } => "Failed to connect to AI service",
            Self::MalformedUpstreamResponse(_) => "The AI service returned an unreadable reply",
            Self::EmptyOrMalformedQuiz => "No questions generated",
            Self::Validation(_) => "A required input was missing or invalid",
            Self::Transcription(_) => "Could not transcribe the recording",
            Self::NotAuthorized(_) => "Unauthorized: Please sign in",
        }
    }
}
