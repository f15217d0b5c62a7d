//! Quiz entity - the quiz use case result

use serde::{Deserialize, Serialize};

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text
    pub question: String,
    /// Labeled options, "A)" through "D)"
    pub options: Vec<String>,
    /// Exact copy of the correct option, including its label
    pub answer: String,
}

/// A generated quiz
///
/// The prompt demands four options per question and an answer matching one
/// of them, but replies are accepted as-is beyond field presence - the
/// per-question shape is not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Questions in presentation order
    #[serde(rename = "quizQuestions")]
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Number of questions in the quiz
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the quiz contains no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
