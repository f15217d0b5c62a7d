//! Identity port - interface for the caller-identity verifier
//!
//! Hosts run this gate before any pipeline entry point; the pipeline
//! itself never sees an unverified caller.

use async_trait::async_trait;
use domain::SubjectId;
#[cfg(test)]
use mockall::automock;

use crate::error::PipelineError;

/// Port for credential verification
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Verify an opaque credential, returning the subject it belongs to
    async fn verify_token(&self, token: &str) -> Result<SubjectId, PipelineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_identity_verifies_token() {
        let mut mock = MockIdentityPort::new();
        mock.expect_verify_token()
            .returning(|_| SubjectId::new("uid-1").map_err(PipelineError::Validation));

        let subject = mock.verify_token("valid-token").await.unwrap();
        assert_eq!(subject.as_str(), "uid-1");
    }

    #[tokio::test]
    async fn mock_identity_rejects_token() {
        let mut mock = MockIdentityPort::new();
        mock.expect_verify_token()
            .returning(|_| Err(PipelineError::NotAuthorized("expired".to_string())));

        let result = mock.verify_token("stale").await;
        assert!(matches!(result, Err(PipelineError::NotAuthorized(_))));
    }
}
