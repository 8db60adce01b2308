//! Request/response logging interceptor.

use async_trait::async_trait;
use tracing::info;

use super::Interceptor;
use crate::chain::Next;
use crate::error::HttpError;
use crate::message::{Request, Response};

/// Logs every request before dispatch and every response after.
///
/// Purely observational: request and response pass through untouched, and
/// downstream errors propagate unchanged (skipping the response log).
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

impl LoggingInterceptor {
    /// Creates a new logging interceptor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, request: &Request, next: Next<'_>) -> Result<Response, HttpError> {
        info!(method = %request.method(), url = %request.url(), "Sending request");
        let response = next.run(request).await?;
        info!(status = %response.status(), url = %request.url(), "Response received");
        Ok(response)
    }
}

// ============================================================================
// Tests
// ============================================================================
