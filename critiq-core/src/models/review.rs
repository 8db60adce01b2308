//! Review inputs and outputs.
//!
//! This module contains the request/response pair for one review run:
//! - [`CandidateLevel`] - Experience level the review is calibrated to
//! - [`ReviewRequest`] - Validated inputs for one run
//! - [`ReviewResponse`] - Generated review plus the reviewed file names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::repo::RepoId;

// ============================================================================
// Candidate Level
// ============================================================================

/// Experience level of the candidate whose code is being reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateLevel {
    /// Entry-level developer.
    Junior,
    /// Mid-level developer.
    Middle,
    /// Senior developer.
    Senior,
}

impl CandidateLevel {
    /// Returns the canonical label for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Middle => "Middle",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for CandidateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "junior" => Ok(Self::Junior),
            "middle" => Ok(Self::Middle),
            "senior" => Ok(Self::Senior),
            _ => Err(CoreError::UnknownLevel(s.to_string())),
        }
    }
}

// ============================================================================
// Review Request
// ============================================================================

/// Validated inputs for one review run.
///
/// Also serves as the memoization key for cached runs, hence `Hash`/`Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewRequest {
    /// Repository to review.
    pub repository: RepoId,
    /// Assignment the candidate was asked to complete.
    pub description: String,
    /// Level the review expectations are calibrated to.
    pub level: CandidateLevel,
}

impl ReviewRequest {
    /// Creates a new review request.
    pub fn new(repository: RepoId, description: impl Into<String>, level: CandidateLevel) -> Self {
        Self {
            repository,
            description: description.into(),
            level,
        }
    }
}

// ============================================================================
// Review Response
// ============================================================================

/// Result of one review run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Generated review text.
    pub review: String,
    /// Names of the reviewed files, in traversal order.
    pub files: Vec<String>,
}

impl ReviewResponse {
    /// Creates a new review response.
    pub fn new(review: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            review: review.into(),
            files,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
