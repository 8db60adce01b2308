//! Transport seam for network dispatch.
//!
//! The retry interceptor performs real I/O through a [`Transport`] handed in
//! by the caller; nothing in this crate owns a process-wide client. A
//! transport yields one [`Connection`] per interceptor invocation, and
//! dropping the connection releases its resources on every exit path,
//! including early returns and cancellation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::HttpError;
use crate::message::{Headers, Request, Response};

/// Default per-attempt request timeout.
///
/// Generous because chat-completion responses routinely take tens of
/// seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

// ============================================================================
// Transport Traits
// ============================================================================

/// Source of scoped network connections.
///
/// Shared across services behind an `Arc`; every [`connect`](Self::connect)
/// yields a fresh [`Connection`] scoped to a single interceptor call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Opens a connection for the duration of one interceptor call.
    async fn connect(&self) -> Result<Box<dyn Connection>, HttpError>;
}

/// A scoped dispatch resource.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Dispatches one request and reads the full response.
    async fn dispatch(&self, request: &Request) -> Result<Response, HttpError>;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// [`Transport`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a custom per-attempt timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn connect(&self) -> Result<Box<dyn Connection>, HttpError> {
        let client = Client::builder().timeout(self.timeout).build()?;
        Ok(Box::new(ReqwestConnection { client }))
    }
}

/// One reqwest client scoped to a single interceptor invocation.
struct ReqwestConnection {
    client: Client,
}

#[async_trait]
impl Connection for ReqwestConnection {
    async fn dispatch(&self, request: &Request) -> Result<Response, HttpError> {
        debug!(method = %request.method(), url = %request.url(), "Dispatching request");

        let mut builder = self
            .client
            .request(request.method().clone(), request.url().clone());
        for (name, value) in request.headers().iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(status = %status, url = %request.url(), "Response received");

        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str(), value);
            }
        }
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}
