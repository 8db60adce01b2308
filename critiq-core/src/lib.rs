// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Critiq Core
//!
//! Core domain types for the Critiq code review tool.
//!
//! This crate provides the value types shared across all other Critiq
//! crates, including:
//!
//! - Fetched file models ([`SourceFile`], [`FileList`])
//! - Repository identity and URL validation ([`RepoId`])
//! - Review inputs and outputs ([`ReviewRequest`], [`ReviewResponse`],
//!   [`CandidateLevel`])
//! - Error types ([`CoreError`])
//!
//! None of these types perform I/O; validation happens at construction so
//! downstream crates can rely on well-formed values.

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // File types
    FileList,
    SourceFile,
    // Repository identity
    RepoId,
    // Review types
    CandidateLevel,
    ReviewRequest,
    ReviewResponse,
};
