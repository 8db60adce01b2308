//! Bounded retry of server-side failures.

use std::time::Duration;

use super::{RetryDecision, RetryStrategy};
use crate::message::Response;

/// Default retry ceiling.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default exponential backoff base.
pub const DEFAULT_BACKOFF_FACTOR: f64 = 2.0;

/// Retries 5xx responses up to a fixed number of times.
///
/// Anything below 500, including 4xx client errors, is final on the first
/// response. Retries are immediate; [`backoff`](RetryStrategy::backoff)
/// exposes the exponential schedule (`factor` to the power of the attempt
/// number, in seconds) for callers that want pacing. Schedule values
/// outside the representable range saturate to [`Duration::MAX`].
#[derive(Debug, Clone, Copy)]
pub struct ServerErrorRetry {
    max_retries: u32,
    backoff_factor: f64,
}

impl ServerErrorRetry {
    /// Creates a strategy with the given ceiling and backoff base.
    pub fn new(max_retries: u32, backoff_factor: f64) -> Self {
        Self {
            max_retries,
            backoff_factor,
        }
    }

    /// Maximum number of retries after the initial attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

impl Default for ServerErrorRetry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_BACKOFF_FACTOR)
    }
}

impl RetryStrategy for ServerErrorRetry {
    fn decide(&self, response: &Response, attempt: u32) -> RetryDecision {
        if response.status().is_server_error() && attempt < self.max_retries {
            RetryDecision::retry_now()
        } else {
            RetryDecision::Stop
        }
    }

    fn backoff(&self, _response: &Response, attempt: u32) -> Duration {
        Duration::try_from_secs_f64(self.backoff_factor.powf(f64::from(attempt)))
            .unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Headers, StatusCode};

    fn response(code: u16) -> Response {
        Response::new(
            StatusCode::from_u16(code).unwrap(),
            Headers::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_server_errors_are_retried_within_ceiling() {
        let strategy = ServerErrorRetry::default();
        for code in [500, 502, 503] {
            for attempt in 0..3 {
                assert!(
                    strategy.decide(&response(code), attempt).is_retry(),
                    "expected retry for {code} at attempt {attempt}"
                );
            }
        }
    }

    #[test]
    fn test_ceiling_is_hard() {
        let strategy = ServerErrorRetry::default();
        assert_eq!(strategy.decide(&response(500), 3), RetryDecision::Stop);
        assert_eq!(strategy.decide(&response(503), 3), RetryDecision::Stop);
        assert_eq!(strategy.decide(&response(500), 4), RetryDecision::Stop);
    }

    #[test]
    fn test_non_server_errors_are_final() {
        let strategy = ServerErrorRetry::default();
        for code in [200, 403, 404, 499] {
            assert_eq!(
                strategy.decide(&response(code), 0),
                RetryDecision::Stop,
                "expected stop for {code}"
            );
        }
    }

    #[test]
    fn test_retries_are_immediate() {
        let strategy = ServerErrorRetry::default();
        assert_eq!(
            strategy.decide(&response(500), 0),
            RetryDecision::retry_now()
        );
    }

    #[test]
    fn test_backoff_grows_exponentially() {
        let strategy = ServerErrorRetry::default();
        let resp = response(500);
        assert_eq!(strategy.backoff(&resp, 0), Duration::from_secs(1));
        assert_eq!(strategy.backoff(&resp, 1), Duration::from_secs(2));
        assert_eq!(strategy.backoff(&resp, 2), Duration::from_secs(4));
        assert_eq!(strategy.backoff(&resp, 3), Duration::from_secs(8));
    }

    #[test]
    fn test_backoff_saturates_out_of_range() {
        // Factor 2.0 overflows f64 well before attempt 2000.
        let strategy = ServerErrorRetry::default();
        assert_eq!(strategy.backoff(&response(500), 2000), Duration::MAX);

        // A negative base yields a negative wait on odd attempts.
        let negative = ServerErrorRetry::new(3, -2.0);
        assert_eq!(negative.backoff(&response(500), 1), Duration::MAX);
    }

    #[test]
    fn test_custom_ceiling() {
        let strategy = ServerErrorRetry::new(1, 2.0);
        assert!(strategy.decide(&response(500), 0).is_retry());
        assert_eq!(strategy.decide(&response(500), 1), RetryDecision::Stop);
    }
}
