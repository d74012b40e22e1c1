//! Retry logic.
//!
//! # Responsibilities
//! - Classify failures as transient (retry) or terminal (surface)
//! - Re-invoke an operation immediately on a transient failure
//! - Enforce the retry budget (extra attempts after the first)
//!
//! # Design Decisions
//! - Bounded loop with an attempt counter; no recursion
//! - No backoff or jitter: retries are immediate
//! - The policy knows nothing about the operation's domain

use std::fmt::Display;
use std::future::Future;

use crate::config::RetryConfig;
use crate::observability::metrics;

/// Failures that can tell whether repeating the same request may succeed.
pub trait Retryable {
    fn is_transient(&self) -> bool;
}

/// Bounded, immediate retry on transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.max_retries)
    }

    /// Total attempts allowed, first one included.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Run `op` until it succeeds, fails terminally, or the budget runs out.
    ///
    /// The last failure is returned unchanged once the budget is exhausted.
    pub async fn execute<T, E, F, Fut>(&self, operation: &'static str, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + Display,
    {
        let max_attempts = self.max_attempts();
        let mut attempts = 0;

        loop {
            attempts += 1;

            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempts < max_attempts => {
                    tracing::info!(operation, attempt = attempts, error = %e, "Retrying request");
                    metrics::record_retry(operation);
                }
                Err(e) => {
                    if e.is_transient() {
                        tracing::warn!(operation, attempts, error = %e, "Retry budget exhausted");
                    }
                    return Err(e);
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
