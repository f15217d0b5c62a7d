//! Caller verification gate
//!
//! Precondition for every entry point: hosts verify the caller before the
//! pipeline runs. Accepts the raw Authorization header value and handles
//! the "Bearer <token>" form.

use domain::SubjectId;
use tracing::{debug, instrument};

use crate::{error::PipelineError, ports::IdentityPort};

/// Verify the caller behind an Authorization header value
#[instrument(skip(identity, authorization))]
pub async fn verify_caller(
    identity: &dyn IdentityPort,
    authorization: Option<&str>,
) -> Result<SubjectId, PipelineError> {
    let Some(header) = authorization else {
        return Err(PipelineError::NotAuthorized(
            "missing authorization header".to_string(),
        ));
    };

    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    if token.is_empty() {
        return Err(PipelineError::NotAuthorized(
            "empty credential".to_string(),
        ));
    }

    let subject = identity.verify_token(token).await?;
    debug!(subject = %subject, "Caller verified");
    Ok(subject)
}
