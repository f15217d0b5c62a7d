//! Study service - the three AI-pipeline entry points
//!
//! Each call is stateless and independent: validate inputs, compile the
//! prompt, run the resilient completion, normalize the reply. Two identical
//! transcripts submitted concurrently each pay the full model cost; there
//! is no de-duplication and no shared state.

use std::{fmt, sync::Arc};

use domain::{DomainError, FactAnswer, Quiz, StudyNotes};
use tracing::{debug, instrument};

use crate::{error::PipelineError, normalizer, ports::CompletionPort, prompts};

/// Service turning transcripts into study material
pub struct StudyService {
    completion: Arc<dyn CompletionPort>,
}

impl fmt::Debug for StudyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudyService")
            .field("model", &self.completion.model_name())
            .finish_non_exhaustive()
    }
}

/// Reject empty or whitespace-only caller inputs before any network call
fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::missing(field));
    }
    Ok(())
}

impl StudyService {
    /// Create a new study service over an injected completion port
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self { completion }
    }

    /// Generate summary notes, key points, and flashcards for a transcript
    #[instrument(skip(self, transcript), fields(transcript_len = transcript.len()))]
    pub async fn summarize(&self, transcript: &str) -> Result<StudyNotes, PipelineError> {
        require("transcript", transcript)?;

        let spec = prompts::summary_prompt(transcript);
        let result = self.completion.complete(&spec).await?;

        debug!(
            model = %result.model,
            tokens = ?result.tokens_used,
            latency_ms = result.latency_ms,
            "Summary reply received"
        );

        normalizer::study_notes(&result.content)
    }

    /// Generate a multiple-choice quiz for a transcript
    ///
    /// `difficulty` and `count` are caller-supplied request fields:
    /// unrecognized difficulty falls back to medium, absent or zero count
    /// falls back to five.
    #[instrument(skip(self, transcript), fields(transcript_len = transcript.len(), difficulty, count))]
    pub async fn generate_quiz(
        &self,
        transcript: &str,
        difficulty: Option<&str>,
        count: Option<u32>,
    ) -> Result<Quiz, PipelineError> {
        require("transcript", transcript)?;

        let spec = prompts::quiz_prompt(transcript, difficulty, count);
        let result = self.completion.complete(&spec).await?;

        debug!(
            model = %result.model,
            latency_ms = result.latency_ms,
            "Quiz reply received"
        );

        normalizer::quiz(&result.content)
    }

    /// Answer a narrow question grounded only in the transcript excerpt
    #[instrument(skip(self, transcript, query), fields(transcript_len = transcript.len()))]
    pub async fn verify_fact(
        &self,
        transcript: &str,
        query: &str,
    ) -> Result<FactAnswer, PipelineError> {
        require("transcript", transcript)?;
        require("query", query)?;

        let spec = prompts::fact_check_prompt(transcript, query);
        let result = self.completion.complete(&spec).await?;

        debug!(
            model = %result.model,
            latency_ms = result.latency_ms,
            "Fact-check reply received"
        );

        normalizer::fact_answer(&result.content)
    }

    /// Check if the underlying completion backend is reachable
    pub async fn is_healthy(&self) -> bool {
        self.completion.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::ports::CompletionResult;
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

    fn reply(content: &str) -> CompletionResult {
        CompletionResult {
            content: content.to_string(),
            model: "test-model".to_string(),
            tokens_used: Some(42),
            latency_ms: 100,
        }
    }

    fn service_replying(content: &'static str) -> StudyService {
        let mut mock = MockCompletion::new();
        mock.expect_complete().returning(move |_| Ok(reply(content)));
        StudyService::new(Arc::new(mock))
    }

    // =========================================================================
    // Summarize
    // =========================================================================

    #[tokio::test]
    async fn summarize_returns_normalized_notes() {
        let service = service_replying(
            r###"{"summary":"## Photosynthesis","keyPoints":["light"],"flashcards":[]}"###,
        );

        let notes = service.summarize("A lecture about photosynthesis.").await.unwrap();
        assert_eq!(notes.summary, "## Photosynthesis");
        assert_eq!(notes.key_points, vec!["light"]);
    }

    #[tokio::test]
    async fn summarize_repairs_missing_keys_and_still_succeeds() {
        let service = service_replying(r#"{"summary":"Notes only"}"#);

        let notes = service.summarize("transcript").await.unwrap();
        assert_eq!(notes.summary, "Notes only");
        assert!(notes.key_points.is_empty());
        assert!(notes.flashcards.is_empty());
    }

    #[tokio::test]
    async fn summarize_rejects_empty_transcript_before_completion() {
        let mut mock = MockCompletion::new();
        mock.expect_complete().never();
        let service = StudyService::new(Arc::new(mock));

        let result = service.summarize("   ").await;
        assert!(matches!(result, Err(PipelineError::Validation(_))));
    }

    #[tokio::test]
    async fn summarize_propagates_terminal_failure() {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .returning(|_| Err(PipelineError::UpstreamUnavailable { attempts: 3 }));
        let service = StudyService::new(Arc::new(mock));

        let result = service.summarize("transcript").await;
        assert!(matches!(
            result,
            Err(PipelineError::UpstreamUnavailable { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn summarize_classifies_unparseable_reply() {
        let service = service_replying("the model rambled instead of emitting JSON");

        let result = service.summarize("transcript").await;
        assert!(matches!(
            result,
            Err(PipelineError::MalformedUpstreamResponse(_))
        ));
    }

    // =========================================================================
    // Quiz
    // =========================================================================

    #[tokio::test]
    async fn quiz_end_to_end_scenario() {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .withf(|spec| {
                spec.expects_json
                    && spec.user.contains("exactly 2")
                    && spec.user.contains("EASY")
            })
            .returning(|_| {
                Ok(reply(
                    r#"{"quizQuestions":[{"question":"Q1","options":["A) x","B) y","C) z","D) w"],"answer":"A) x"},{"question":"Q2","options":["A) a","B) b","C) c","D) d"],"answer":"B) b"}]}"#,
                ))
            });
        let service = StudyService::new(Arc::new(mock));

        let quiz = service
            .generate_quiz(
                "Photosynthesis converts light into chemical energy.",
                Some("easy"),
                Some(2),
            )
            .await
            .unwrap();

        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.questions[0].question, "Q1");
        assert_eq!(quiz.questions[0].answer, "A) x");
        assert_eq!(quiz.questions[1].question, "Q2");
        assert_eq!(quiz.questions[1].answer, "B) b");
        assert_eq!(quiz.questions[1].options[3], "D) d");
    }

    #[tokio::test]
    async fn quiz_empty_reply_is_a_failure_not_an_empty_success() {
        let service = service_replying(r#"{"quizQuestions":[]}"#);

        let result = service.generate_quiz("transcript", None, None).await;
        assert!(matches!(result, Err(PipelineError::EmptyOrMalformedQuiz)));
    }

    #[tokio::test]
    async fn quiz_rejects_empty_transcript() {
        let mut mock = MockCompletion::new();
        mock.expect_complete().never();
        let service = StudyService::new(Arc::new(mock));

        let result = service.generate_quiz("", Some("easy"), Some(3)).await;
        assert!(matches!(result, Err(PipelineError::Validation(_))));
    }

    // =========================================================================
    // Fact-check
    // =========================================================================

    #[tokio::test]
    async fn verify_fact_returns_answer() {
        let service = service_replying(r#"{"answer":"Yes, at the very beginning."}"#);

        let answer = service
            .verify_fact("transcript", "Was photosynthesis mentioned?")
            .await
            .unwrap();
        assert_eq!(answer.answer, "Yes, at the very beginning.");
    }

    #[tokio::test]
    async fn verify_fact_degrades_on_missing_answer() {
        let service = service_replying("{}");

        let answer = service.verify_fact("transcript", "query").await.unwrap();
        assert!(answer.is_unverified());
    }

    #[tokio::test]
    async fn verify_fact_requires_both_inputs() {
        let mut mock = MockCompletion::new();
        mock.expect_complete().never();
        let service = StudyService::new(Arc::new(mock));

        assert!(matches!(
            service.verify_fact("", "query").await,
            Err(PipelineError::Validation(_))
        ));
        assert!(matches!(
            service.verify_fact("transcript", "").await,
            Err(PipelineError::Validation(_))
        ));
    }

    // =========================================================================
    // Misc
    // =========================================================================

    #[tokio::test]
    async fn is_healthy_delegates_to_port() {
        let mut mock = MockCompletion::new();
        mock.expect_is_healthy().returning(|| true);
        let service = StudyService::new(Arc::new(mock));

        assert!(service.is_healthy().await);
    }

    #[test]
    fn debug_names_the_model() {
        let mut mock = MockCompletion::new();
        mock.expect_model_name()
            .returning(|| "llama-3.3-70b-versatile".to_string());
        let service = StudyService::new(Arc::new(mock));

        let debug = format!("{service:?}");
        assert!(debug.contains("StudyService"));
        assert!(debug.contains("llama-3.3-70b-versatile"));
    }
}
