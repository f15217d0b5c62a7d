//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid subject identifier
    #[error("Invalid subject id: {0}")]
    InvalidSubjectId(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a validation error for a missing required input
    pub fn missing(field: &str) -> Self {
        Self::ValidationError(format!("{field} is required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_creates_validation_error() {
        let err = DomainError::missing("transcript");
        assert_eq!(err.to_string(), "Validation failed: transcript is required");
    }

    #[test]
    fn invalid_subject_id_error_message() {
        let err = DomainError::InvalidSubjectId("empty".to_string());
        assert_eq!(err.to_string(), "Invalid subject id: empty");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("query is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: query is required");
    }
}
