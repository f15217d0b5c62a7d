//! Study notes entity - the summarize use case result

use serde::{Deserialize, Serialize};

/// A two-sided study flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Concept or question
    pub front: String,
    /// Clear, simple explanation
    pub back: String,
}

/// Structured study notes generated from a lecture transcript
///
/// Field names follow the upstream JSON contract (`keyPoints` stays
/// camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyNotes {
    /// Markdown-formatted explanation of the lecture
    pub summary: String,
    /// Concise takeaways
    #[serde(rename = "keyPoints")]
    pub key_points: Vec<String>,
    /// Flashcards for revision
    pub flashcards: Vec<Flashcard>,
}

/// Summary text substituted when the model omits the `summary` key
pub const FALLBACK_SUMMARY: &str = "Summary generation failed";

impl StudyNotes {
    /// Notes with all keys at their repair defaults
    pub fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            key_points: Vec::new(),
            flashcards: Vec::new(),
        }
    }
}
