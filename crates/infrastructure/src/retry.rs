//! Fixed-interval retry for completion calls
//!
//! Deliberately simpler than the usual exponential-backoff helpers: up to a
//! fixed number of attempts with a constant pause between them, and every
//! failure is retryable. The completion service is the only caller and its
//! failure modes (connect error, non-2xx, timeout) are all worth one more
//! try at the same cadence.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::retry::{RetryConfig, with_retry};
//!
//! let config = RetryConfig::default();
//! let outcome = with_retry(&config, || async {
//!     completion_service.call().await
//! }).await;
//! ```

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Configuration for fixed-interval retry behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed pause between attempts in milliseconds (default: 2000ms)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_delay_ms() -> u64 {
    2000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl RetryConfig {
    /// Create a retry configuration with custom parameters
    #[must_use]
    pub const fn new(max_attempts: u32, delay_ms: u64) -> Self {
        Self {
            max_attempts,
            delay_ms,
        }
    }

    /// The fixed inter-attempt pause
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Outcome of a retried operation plus metadata about the attempts made
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    /// The final result: first success, or the last attempt's error
    pub result: Result<T, E>,
    /// Number of attempts made (1 = no retries)
    pub attempts: u32,
    /// Total time spent including inter-attempt pauses
    pub total_duration: Duration,
}

impl<T, E> RetryOutcome<T, E> {
    /// Check if the operation succeeded
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Convert to a standard Result, discarding metadata
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Execute an async operation with fixed-interval retries
///
/// Attempts are strictly sequential. The loop terminates early on the
/// first success and after the final attempt otherwise - the last error is
/// returned as a value, never raised past this boundary.
#[allow(clippy::cast_possible_truncation)]
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> RetryOutcome<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let start = std::time::Instant::now();
    let max_attempts = config.max_attempts.max(1);
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match operation().await {
            Ok(value) => {
                if attempts > 1 {
                    debug!(
                        attempts,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "Operation succeeded after retries"
                    );
                }
                return RetryOutcome {
                    result: Ok(value),
                    attempts,
                    total_duration: start.elapsed(),
                };
            },
            Err(err) => {
                if attempts >= max_attempts {
                    warn!(
                        attempts,
                        error = %err,
                        "Operation failed on final attempt"
                    );
                    return RetryOutcome {
                        result: Err(err),
                        attempts,
                        total_duration: start.elapsed(),
                    };
                }

                warn!(
                    attempt = attempts,
                    max_attempts,
                    delay_ms = config.delay_ms,
                    error = %err,
                    "Operation failed, retrying after fixed delay"
                );

                tokio::time::sleep(config.delay()).await;
            },
        }
    }
}
