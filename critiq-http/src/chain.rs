//! Interceptor chain for outbound requests.
//!
//! A chain composes an ordered sequence of interceptors into one
//! request-sending entry point. Dispatch walks the sequence with an index
//! cursor: each interceptor receives a [`Next`] handle addressing the
//! remainder of the chain and decides whether to call onward.

use tracing::{debug, instrument};

use crate::error::HttpError;
use crate::interceptor::Interceptor;
use crate::message::{Request, Response};

// ============================================================================
// Interceptor Chain
// ============================================================================

/// An ordered sequence of interceptors forming one send pipeline.
///
/// The last interceptor must terminate the chain by performing the dispatch
/// (in practice the retry interceptor). A chain that runs past its end,
/// including an empty chain, fails with [`HttpError::ChainExhausted`].
pub struct InterceptorChain {
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl InterceptorChain {
    /// Creates a chain from the given interceptors, outermost first.
    pub fn new(interceptors: Vec<Box<dyn Interceptor>>) -> Self {
        Self { interceptors }
    }

    /// Returns the number of interceptors.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Returns true if the chain has no interceptors.
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Sends a request through the chain and returns the final response.
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn send(&self, request: &Request) -> Result<Response, HttpError> {
        debug!(interceptors = self.interceptors.len(), "Dispatching through chain");
        Next::new(&self.interceptors).run(request).await
    }
}

// ============================================================================
// Next Cursor
// ============================================================================

/// Cursor over the remaining interceptors of a chain.
///
/// Each interceptor receives one; calling [`run`](Next::run) hands the
/// request to the next interceptor in order. Running an exhausted cursor is
/// the explicit [`HttpError::ChainExhausted`] failure, never a silent no-op.
pub struct Next<'a> {
    remaining: &'a [Box<dyn Interceptor>],
}

impl<'a> Next<'a> {
    fn new(remaining: &'a [Box<dyn Interceptor>]) -> Self {
        Self { remaining }
    }

    /// Invokes the next interceptor in the chain.
    pub async fn run(self, request: &Request) -> Result<Response, HttpError> {
        match self.remaining.split_first() {
            Some((head, rest)) => head.intercept(request, Next::new(rest)).await,
            None => Err(HttpError::ChainExhausted),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
