//! Interceptors wrapping one unit of request dispatch.
//!
//! An interceptor may inspect the request before calling onward, inspect the
//! response after, short-circuit by not calling onward, or wrap the call in
//! error handling. [`crate::chain::InterceptorChain`] composes them in
//! order.
//!
//! ## Shipped interceptors
//!
//! - [`LoggingInterceptor`] - Observes requests and responses, touches
//!   nothing
//! - [`RetryInterceptor`] - Terminal dispatcher looping on a retry policy

mod logging;
mod retry;

use async_trait::async_trait;

use crate::chain::Next;
use crate::error::HttpError;
use crate::message::{Request, Response};

pub use logging::LoggingInterceptor;
pub use retry::RetryInterceptor;

// ============================================================================
// Interceptor Trait
// ============================================================================

/// A composable wrapper around one HTTP dispatch.
///
/// Implementations receive the immutable request plus a [`Next`] cursor
/// addressing the rest of the chain. Errors from downstream propagate
/// unchanged unless an interceptor deliberately handles them.
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Handles one request, optionally invoking the rest of the chain.
    async fn intercept(&self, request: &Request, next: Next<'_>) -> Result<Response, HttpError>;
}
