//! Core error types for Critiq.

use thiserror::Error;

/// Core error type for domain validation failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository URL does not match the canonical GitHub shape.
    #[error("Invalid repository URL: {0}")]
    InvalidRepoUrl(String),

    /// Candidate level string is not one of the known levels.
    #[error("Unknown candidate level: {0} (expected Junior, Middle, or Senior)")]
    UnknownLevel(String),
}
