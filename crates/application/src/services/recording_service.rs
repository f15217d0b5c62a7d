//! Recording service - the upload flow
//!
//! Transcribes an uploaded audio file, then runs the summarize pipeline on
//! the recognized text. The temporary file itself is managed by the host;
//! this service only receives its path.

use std::{fmt, path::Path, sync::Arc};

use domain::StudyNotes;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    error::PipelineError,
    ports::TranscriberPort,
    services::StudyService,
};

/// Outcome of processing one uploaded recording
///
/// Serializable as-is so hosts can hand it back to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedRecording {
    /// Full recognized transcript, returned alongside the notes
    pub transcript: String,
    /// Normalized study notes generated from the transcript
    pub notes: StudyNotes,
}

/// Service handling the transcribe-then-summarize upload flow
pub struct RecordingService {
    transcriber: Arc<dyn TranscriberPort>,
    study: StudyService,
}

impl fmt::Debug for RecordingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingService").finish_non_exhaustive()
    }
}

impl RecordingService {
    /// Create a new recording service
    pub fn new(transcriber: Arc<dyn TranscriberPort>, study: StudyService) -> Self {
        Self { transcriber, study }
    }

    /// Transcribe the audio at `audio_path` and summarize the result
    #[instrument(skip(self, audio_path))]
    pub async fn process(&self, audio_path: &Path) -> Result<ProcessedRecording, PipelineError> {
        let transcription = self.transcriber.transcribe(audio_path).await?;

        if transcription.text.trim().is_empty() {
            return Err(PipelineError::Transcription(
                "no speech recognized in recording".to_string(),
            ));
        }

        debug!(
            transcript_len = transcription.text.len(),
            language = ?transcription.detected_language,
            "Transcription complete"
        );

        let notes = self.study.summarize(&transcription.text).await?;

        Ok(ProcessedRecording {
            transcript: transcription.text,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::ports::{CompletionPort, CompletionResult, Transcription};
    use crate::prompts::PromptSpec;

    mock! {
        pub Completion {}

        #[async_trait::async_trait]
        impl CompletionPort for Completion {
            async fn complete(&self, prompt: &PromptSpec) -> Result<CompletionResult, PipelineError>;
            async fn is_healthy(&self) -> bool;
            fn model_name(&self) -> String;
        }
    }

    mock! {
        pub Transcriber {}

        #[async_trait::async_trait]
        impl TranscriberPort for Transcriber {
            async fn transcribe(&self, audio_path: &std::path::Path) -> Result<Transcription, PipelineError>;
        }
    }

    fn transcription(text: &str) -> Transcription {
        Transcription {
            text: text.to_string(),
            detected_language: Some("en".to_string()),
            duration_ms: Some(60_000),
        }
    }

    fn study_with_reply(content: &'static str) -> StudyService {
        let mut completion = MockCompletion::new();
        completion.expect_complete().returning(move |_| {
            Ok(CompletionResult {
                content: content.to_string(),
                model: "test-model".to_string(),
                tokens_used: None,
                latency_ms: 10,
            })
        });
        StudyService::new(Arc::new(completion))
    }

    #[tokio::test]
    async fn process_transcribes_then_summarizes() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_| Ok(transcription("The speaker explains osmosis.")));

        let service = RecordingService::new(
            Arc::new(transcriber),
            study_with_reply(r###"{"summary":"## Osmosis","keyPoints":[],"flashcards":[]}"###),
        );

        let result = service.process(Path::new("/tmp/lecture.mp3")).await.unwrap();
        assert_eq!(result.transcript, "The speaker explains osmosis.");
        assert_eq!(result.notes.summary, "## Osmosis");
    }

    #[tokio::test]
    async fn process_surfaces_transcription_failure() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_| Err(PipelineError::Transcription("decoder error".to_string())));

        let service = RecordingService::new(
            Arc::new(transcriber),
            study_with_reply("{}"),
        );

        let result = service.process(Path::new("/tmp/broken.ogg")).await;
        assert!(matches!(result, Err(PipelineError::Transcription(_))));
    }

    #[tokio::test]
    async fn process_rejects_silent_recordings() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_| Ok(transcription("   ")));

        let mut completion = MockCompletion::new();
        completion.expect_complete().never();
        let service = RecordingService::new(
            Arc::new(transcriber),
            StudyService::new(Arc::new(completion)),
        );

        let result = service.process(Path::new("/tmp/silence.wav")).await;
        assert!(matches!(result, Err(PipelineError::Transcription(_))));
    }

    #[tokio::test]
    async fn process_propagates_pipeline_failure() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_| Ok(transcription("transcript text")));

        let mut completion = MockCompletion::new();
        completion
            .expect_complete()
            .returning(|_| Err(PipelineError::UpstreamUnavailable { attempts: 3 }));
        let service = RecordingService::new(
            Arc::new(transcriber),
            StudyService::new(Arc::new(completion)),
        );

        let result = service.process(Path::new("/tmp/lecture.mp3")).await;
        assert!(matches!(
            result,
            Err(PipelineError::UpstreamUnavailable { .. })
        ));
    }
}
