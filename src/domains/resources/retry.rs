//! Fixed-interval bounded retry for any fallible async operation.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

/// How often and how many times a failed operation is reattempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    interval: Duration,
    times: u32,
}

impl RetryPolicy {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);
    pub const DEFAULT_TIMES: u32 = 3;

    /// Retry up to `times` times, waiting `interval` before each retry.
    pub const fn spaced(interval: Duration, times: u32) -> Self {
        Self { interval, times }
    }

    /// Never retry.
    pub const fn once() -> Self {
        Self::spaced(Duration::ZERO, 0)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn times(&self) -> u32 {
        self.times
    }

    /// First try plus retries; always at least 1.
    pub fn max_attempts(&self) -> u32 {
        self.times.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::spaced(Self::DEFAULT_INTERVAL, Self::DEFAULT_TIMES)
    }
}

/// Returned once every attempt allowed by the policy has failed.
#[derive(Debug)]
pub struct Exhausted<E> {
    /// Number of attempts made.
    pub attempts: u32,

    /// Error of the final attempt.
    pub last: E,
}

/// Run `op` until it succeeds or the policy's attempts are spent.
///
/// No attempt is issued after the returned future is dropped, so abandoning
/// the caller also stops the retry schedule.
pub async fn retry_fixed<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, Exhausted<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(last) if attempt >= max_attempts => {
                return Err(Exhausted {
                    attempts: attempt,
                    last,
                });
            }
            Err(e) => {
                warn!("Attempt {}/{} failed: {}", attempt, max_attempts, e);
                debug!("Retrying in {:?}", policy.interval);
                tokio::time::sleep(policy.interval).await;
                attempt += 1;
            }
        }
    }
}
