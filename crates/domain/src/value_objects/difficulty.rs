//! Quiz difficulty value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested quiz difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Basic facts and definitions
    Easy,
    /// Understanding and application
    #[default]
    Medium,
    /// Analysis and critical thinking
    Hard,
}

impl Difficulty {
    /// Parse a caller-supplied difficulty, falling back to `Medium`
    ///
    /// Unrecognized values are not an error: callers send free-form strings
    /// and the contract is best-effort.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }

    /// Uppercase label embedded into the quiz prompt
    pub const fn prompt_label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!(Difficulty::parse_lenient("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lenient("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lenient("hard"), Difficulty::Hard);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse_lenient("EASY"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lenient(" Hard "), Difficulty::Hard);
    }

    #[test]
    fn unknown_values_fall_back_to_medium() {
        assert_eq!(Difficulty::parse_lenient("brutal"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lenient(""), Difficulty::Medium);
    }

    #[test]
    fn prompt_label_is_uppercase() {
        assert_eq!(Difficulty::Easy.prompt_label(), "EASY");
        assert_eq!(Difficulty::Medium.prompt_label(), "MEDIUM");
        assert_eq!(Difficulty::Hard.prompt_label(), "HARD");
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, r#""hard""#);
    }

    proptest! {
        #[test]
        fn parse_lenient_never_panics(input in ".*") {
            let _ = Difficulty::parse_lenient(&input);
        }

        #[test]
        fn parse_roundtrips_display(d in prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard),
        ]) {
            prop_assert_eq!(Difficulty::parse_lenient(&d.to_string()), d);
        }
    }
}
