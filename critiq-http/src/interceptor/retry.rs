//! Retrying dispatch interceptor.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::Interceptor;
use crate::chain::Next;
use crate::error::HttpError;
use crate::message::{Request, Response};
use crate::retry::{RetryDecision, RetryStrategy};
use crate::transport::Transport;

/// Terminal interceptor performing the actual dispatch, with retries.
///
/// Opens one [`Connection`](crate::transport::Connection) per `intercept`
/// call and drops it on every exit path. The attempt counter is local to
/// the call, so concurrent sends never share retry state. Non-retried
/// responses are returned as-is, whatever their status; classifying them is
/// the caller's job.
///
/// The loop has no iteration ceiling of its own: the interceptor is
/// mechanism, the strategy is policy, and termination is the strategy's
/// contract. Both shipped strategies bound it (see [`crate::retry`]).
pub struct RetryInterceptor {
    strategy: Box<dyn RetryStrategy>,
    transport: Arc<dyn Transport>,
}

impl RetryInterceptor {
    /// Creates a retry interceptor from a policy and a transport.
    pub fn new(strategy: Box<dyn RetryStrategy>, transport: Arc<dyn Transport>) -> Self {
        Self {
            strategy,
            transport,
        }
    }
}

#[async_trait]
impl Interceptor for RetryInterceptor {
    async fn intercept(&self, request: &Request, _next: Next<'_>) -> Result<Response, HttpError> {
        let connection = self.transport.connect().await?;
        let mut attempt: u32 = 0;

        loop {
            let response = connection.dispatch(request).await?;

            match self.strategy.decide(&response, attempt) {
                RetryDecision::Stop => return Ok(response),
                RetryDecision::Retry { wait } => {
                    debug!(
                        status = %response.status(),
                        attempt,
                        wait_secs = wait.as_secs_f64(),
                        url = %request.url(),
                        "Retrying request"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
