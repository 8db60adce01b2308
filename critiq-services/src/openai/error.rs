//! OpenAI service errors.

use critiq_http::{HttpError, StatusCode};
use thiserror::Error;

/// Errors from the completion service.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// The API answered with a non-200 status.
    #[error("OpenAI API returned {status}: {body}")]
    Api {
        /// Status code of the failing response.
        status: StatusCode,
        /// Response body, which carries the API's error message.
        body: String,
    },

    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The response body did not match the completion shape.
    #[error("Failed to decode OpenAI response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The completion arrived with an empty `choices` array.
    #[error("Completion response contained no choices")]
    EmptyChoices,
}
