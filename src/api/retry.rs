//! Retry with exponential backoff for transient provider failures.

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Status codes worth another attempt: rate limiting and server errors.
const RETRY_STATUSES: &[u16] = &[429, 500, 502, 503, 504];

/// Whether a response with `status` may succeed if tried again.
pub fn is_retryable(status: u16) -> bool {
    RETRY_STATUSES.contains(&status)
}

/// Bounded exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles for every retry after that.
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            config.max_retries,
            Duration::from_millis(config.backoff_base_ms),
        )
    }

    /// Backoff before retry number `retry` (0-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(retry))
    }

    /// Decide whether to retry after a response with `status`.
    ///
    /// Returns the delay to wait, or `None` to give up. A `Retry-After`
    /// hint replaces the computed backoff.
    pub fn next_delay(
        &self,
        retries_so_far: u32,
        status: u16,
        retry_after: Option<Duration>,
    ) -> Option<Duration> {
        if retries_so_far >= self.max_retries || !is_retryable(status) {
            return None;
        }
        Some(retry_after.unwrap_or_else(|| self.backoff(retries_so_far)))
    }

    /// Run `op` until it succeeds, fails permanently, or retries run out.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut retries = 0;
        loop {
            let err = match op().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            let delay = match &err {
                Error::Status {
                    status,
                    retry_after,
                } => self.next_delay(retries, *status, *retry_after),
                _ => None,
            };

            match delay {
                Some(delay) => {
                    retries += 1;
                    debug!(
                        "Transient failure ({}), retry {}/{} in {:?}",
                        err, retries, self.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                None => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// Parse a `Retry-After` header given in seconds.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
