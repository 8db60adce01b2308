//! Rate-limit window handling.

use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use super::{RetryDecision, RetryStrategy};
use crate::message::{Response, StatusCode};

/// Header carrying the number of requests left in the current window.
pub const REMAINING_HEADER: &str = "X-RateLimit-Remaining";

/// Header carrying the window reset time as a Unix epoch timestamp.
pub const RESET_HEADER: &str = "X-RateLimit-Reset";

/// Waits out exhausted rate-limit windows.
///
/// Retries only the precise signature of an exhausted window: a `403`
/// response whose [`REMAINING_HEADER`] is `0` and whose [`RESET_HEADER`]
/// is present. The wait is the distance to the reset time, clamped to zero
/// when the window has already passed. Any other `403` is an authorization
/// failure and is final, as is a malformed header.
///
/// The attempt number is ignored: the server bounds the wait itself by
/// advertising when the window reopens, so the strategy terminates without
/// a retry ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateLimitRetry;

impl RateLimitRetry {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    fn decide_at(&self, response: &Response, now_epoch: i64) -> RetryDecision {
        if response.status() != StatusCode::FORBIDDEN {
            return RetryDecision::Stop;
        }

        let Some(remaining) = header_i64(response, REMAINING_HEADER) else {
            return RetryDecision::Stop;
        };
        if remaining != 0 {
            return RetryDecision::Stop;
        }

        let Some(reset) = header_i64(response, RESET_HEADER) else {
            return RetryDecision::Stop;
        };

        let wait = Duration::from_secs(u64::try_from(reset.saturating_sub(now_epoch)).unwrap_or(0));
        debug!(
            reset,
            wait_secs = wait.as_secs(),
            "Rate limit window exhausted"
        );
        RetryDecision::retry_after(wait)
    }
}

fn header_i64(response: &Response, name: &str) -> Option<i64> {
    response.header(name)?.trim().parse().ok()
}

impl RetryStrategy for RateLimitRetry {
    fn decide(&self, response: &Response, _attempt: u32) -> RetryDecision {
        self.decide_at(response, Utc::now().timestamp())
    }

    fn backoff(&self, response: &Response, attempt: u32) -> Duration {
        match self.decide(response, attempt) {
            RetryDecision::Retry { wait } => wait,
            RetryDecision::Stop => Duration::ZERO,
        }
    }
}
