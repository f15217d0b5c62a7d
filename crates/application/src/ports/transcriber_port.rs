//! Transcriber port - interface for the speech-to-text collaborator

use std::path::Path;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::PipelineError;

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct Transcription {
    /// Recognized text
    pub text: String,
    /// Detected language code (e.g., "en", "de")
    pub detected_language: Option<String>,
    /// Duration of the audio in milliseconds
    pub duration_ms: Option<u64>,
}

/// Port for speech-to-text operations
///
/// Consumed once per upload, upstream of the prompt compiler. Failures
/// surface as [`PipelineError::Transcription`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriberPort: Send + Sync {
    /// Transcribe the audio file at `audio_path` to text
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcription, PipelineError>;
}
