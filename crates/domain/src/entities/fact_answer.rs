//! Fact-check answer entity

use serde::{Deserialize, Serialize};

/// Answer returned when the model could not ground a reply in the excerpt
pub const UNVERIFIED_ANSWER: &str = "Unable to verify.";

/// A fact-check answer grounded in a transcript excerpt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactAnswer {
    /// The answer text
    pub answer: String,
}

impl FactAnswer {
    /// The graceful-degradation answer used when the model omits the key
    pub fn unverified() -> Self {
        Self {
            answer: UNVERIFIED_ANSWER.to_string(),
        }
    }

    /// Whether this is the degraded fallback answer
    pub fn is_unverified(&self) -> bool {
        self.answer == UNVERIFIED_ANSWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unverified_uses_fixed_literal() {
        let answer = FactAnswer::unverified();
        assert_eq!(answer.answer, "Unable to verify.");
        assert!(answer.is_unverified());
    }

    #[test]
    fn regular_answer_is_not_unverified() {
        let answer = FactAnswer {
            answer: "Yes, the speaker covered this.".to_string(),
        };
        assert!(!answer.is_unverified());
    }
}
