//! GitHub service errors.

use critiq_http::{HttpError, StatusCode};
use thiserror::Error;

/// Errors from the GitHub content service.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The API answered with a non-200 status.
    #[error("GitHub API returned {status}: {body}")]
    Api {
        /// Status code of the failing response.
        status: StatusCode,
        /// Response body, which carries the API's error message.
        body: String,
    },

    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The response body did not match the expected shape.
    #[error("Failed to decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A file entry arrived without a raw-content URL.
    #[error("File entry has no download URL: {path}")]
    MissingDownloadUrl {
        /// Repository path of the offending entry.
        path: String,
    },
}
