//! Verified caller identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The subject identifier returned by the caller-identity verifier
///
/// Opaque to the pipeline; only non-emptiness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    /// Create a subject id, rejecting empty or whitespace-only input
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidSubjectId(
                "subject id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_identifiers() {
        let id = SubjectId::new("uid-42").unwrap();
        assert_eq!(id.as_str(), "uid-42");
        assert_eq!(id.to_string(), "uid-42");
    }

    #[test]
    fn rejects_empty() {
        assert!(SubjectId::new("").is_err());
        assert!(SubjectId::new("   ").is_err());
    }

    #[test]
    fn equality_by_value() {
        let a = SubjectId::new("same").unwrap();
        let b = SubjectId::new("same").unwrap();
        assert_eq!(a, b);
    }
}
