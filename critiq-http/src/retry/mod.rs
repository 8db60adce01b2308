//! Retry policies.
//!
//! A [`RetryStrategy`] inspects a response and decides whether the request
//! should be sent again. The [`RetryInterceptor`](crate::RetryInterceptor)
//! supplies the mechanism (re-dispatching on the same connection, sleeping
//! between attempts); strategies supply the policy. Two are provided:
//!
//! - [`ServerErrorRetry`] retries 5xx responses up to a fixed ceiling
//! - [`RateLimitRetry`] waits out exhausted rate-limit windows

mod rate_limit;
mod server_error;

use std::time::Duration;

use crate::message::Response;

pub use rate_limit::{RateLimitRetry, REMAINING_HEADER, RESET_HEADER};
pub use server_error::{DEFAULT_BACKOFF_FACTOR, DEFAULT_MAX_RETRIES, ServerErrorRetry};

// ============================================================================
// Decision
// ============================================================================

/// Outcome of consulting a [`RetryStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Send the request again after waiting.
    Retry {
        /// Delay before the next attempt. May be zero.
        wait: Duration,
    },
    /// Accept the response as final.
    Stop,
}

impl RetryDecision {
    /// A retry with no delay.
    pub fn retry_now() -> Self {
        Self::Retry {
            wait: Duration::ZERO,
        }
    }

    /// A retry after the given delay.
    pub fn retry_after(wait: Duration) -> Self {
        Self::Retry { wait }
    }

    /// Returns `true` for [`RetryDecision::Retry`].
    pub fn is_retry(&self) -> bool {
        matches!(self, Self::Retry { .. })
    }
}

// ============================================================================
// Strategy
// ============================================================================

/// Policy deciding whether a response warrants another attempt.
///
/// `attempt` counts completed dispatches before this one, starting at 0 for
/// the first response. Every strategy must eventually return
/// [`RetryDecision::Stop`]; the retry loop itself imposes no ceiling.
pub trait RetryStrategy: Send + Sync {
    /// Decides whether to retry after the given response.
    fn decide(&self, response: &Response, attempt: u32) -> RetryDecision;

    /// Suggested delay before retrying the given attempt.
    ///
    /// Exposed separately from [`decide`](Self::decide) so callers can
    /// inspect a strategy's pacing without committing to a retry.
    fn backoff(&self, response: &Response, attempt: u32) -> Duration;
}
