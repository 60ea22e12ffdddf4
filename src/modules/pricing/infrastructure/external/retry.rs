use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::shared::errors::{AppError, AppResult};

/// Retry configuration for upstream catalog calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Extra attempts after the first, so total tries = `max_retries` + 1.
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter: false,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            ..Self::default()
        }
    }
}

/// Execute an operation with bounded retry and exponential backoff.
///
/// Only transient failures are retried; anything else returns immediately.
/// The backoff sleep suspends the calling task alone.
pub async fn with_retry<F, Fut, T>(
    operation: F,
    policy: &RetryPolicy,
    operation_name: &str,
) -> AppResult<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = AppResult<T>>,
{
    let mut last_error = None;

    for attempt in 0..=policy.max_retries {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(
                        "{} succeeded on attempt {} after {} retries",
                        operation_name,
                        attempt + 1,
                        attempt
                    );
                }
                return Ok(result);
            }
            Err(error) => {
                if !is_retryable(&error) {
                    debug!("{} failed with non-retryable error: {}", operation_name, error);
                    return Err(error);
                }
                last_error = Some(error.clone());

                if attempt < policy.max_retries {
                    let delay = backoff_delay(attempt, policy);
                    warn!(
                        "{} failed on attempt {} ({}), retrying in {:?}",
                        operation_name,
                        attempt + 1,
                        error,
                        delay
                    );
                    sleep(delay).await;
                } else {
                    warn!(
                        "{} failed on final attempt {} ({}), giving up",
                        operation_name,
                        attempt + 1,
                        error
                    );
                }
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| AppError::ExternalServiceError("All retries exhausted".to_string())))
}

/// Transient upstream trouble (5xx, connect/timeout/protocol failures) maps
/// to `ExternalServiceError`; everything else is permanent.
fn is_retryable(error: &AppError) -> bool {
    matches!(error, AppError::ExternalServiceError(_))
}

fn backoff_delay(attempt: u32, policy: &RetryPolicy) -> Duration {
    let exponential =
        policy.base_delay.as_millis() as f64 * policy.backoff_multiplier.powi(attempt as i32);
    let mut delay = Duration::from_millis(exponential as u64);

    if delay > policy.max_delay {
        delay = policy.max_delay;
    }

    if policy.jitter {
        let jitter_factor = 0.1;
        let jitter_ms = (delay.as_millis() as f64 * jitter_factor * rand::random::<f64>()) as u64;
        delay += Duration::from_millis(jitter_ms);
    }

    delay
}
