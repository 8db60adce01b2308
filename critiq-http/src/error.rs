//! HTTP pipeline error types.

use thiserror::Error;

/// Error type for the outbound HTTP pipeline.
///
/// Note that non-2xx responses are not errors at this layer: the chain
/// returns the final [`Response`](crate::message::Response) as-is and the
/// caller classifies status codes at the domain level.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Transport-level failure: connect, TLS, timeout, or body read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The chain ran out of interceptors without anyone dispatching.
    ///
    /// Raised for an empty chain and for a chain whose last interceptor
    /// still called onward; the last interceptor must terminate the chain
    /// by performing the dispatch.
    #[error("Interceptor chain ended without dispatching the request")]
    ChainExhausted,
}
