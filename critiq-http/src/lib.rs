// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Critiq HTTP
//!
//! Interceptor-based outbound HTTP pipeline for the Critiq services.
//!
//! Every outbound request flows through an [`InterceptorChain`]: an ordered
//! sequence of interceptors where each one may observe or act on the request
//! before handing it onward via a [`Next`] cursor. The final interceptor in
//! practice is always the [`RetryInterceptor`], which performs the actual
//! dispatch through an explicitly passed [`Transport`] and loops on the
//! decisions of a pluggable [`RetryStrategy`].
//!
//! ## Modules
//!
//! - [`message`] - `Request`/`Response` value types and the `Headers` map
//! - [`transport`] - The dispatch resource seam, reqwest-backed by default
//! - [`chain`] - The interceptor chain and its index-cursor dispatch
//! - [`interceptor`] - The `Interceptor` trait plus logging and retry
//! - [`retry`] - Retry decision policies (5xx backoff, rate-limit waits)
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use critiq_http::{
//!     InterceptorChain, LoggingInterceptor, RateLimitRetry, ReqwestTransport,
//!     Request, RetryInterceptor,
//! };
//!
//! let transport = Arc::new(ReqwestTransport::new());
//! let chain = InterceptorChain::new(vec![
//!     Box::new(LoggingInterceptor::new()),
//!     Box::new(RetryInterceptor::new(Box::new(RateLimitRetry::new()), transport)),
//! ]);
//!
//! let request = Request::get("https://api.github.com/zen").build()?;
//! let response = chain.send(&request).await?;
//! ```

// Core modules
pub mod chain;
pub mod error;
pub mod interceptor;
pub mod message;
pub mod retry;
pub mod transport;

// Re-export key types at crate root

// Errors
pub use error::HttpError;

// Messages
pub use message::{Headers, Method, Request, RequestBuilder, Response, StatusCode};

// Chain & interceptors
pub use chain::{InterceptorChain, Next};
pub use interceptor::{Interceptor, LoggingInterceptor, RetryInterceptor};

// Retry policies
pub use retry::{RateLimitRetry, RetryDecision, RetryStrategy, ServerErrorRetry};

// Transport
pub use transport::{Connection, DEFAULT_TIMEOUT, ReqwestTransport, Transport};
