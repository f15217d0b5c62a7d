//! Domain entities

mod fact_answer;
mod quiz;
mod study_notes;

pub use fact_answer::{FactAnswer, UNVERIFIED_ANSWER};
pub use quiz::{Quiz, QuizQuestion};
pub use study_notes::{FALLBACK_SUMMARY, Flashcard, StudyNotes};
