//! Domain models for Critiq.
//!
//! This module contains the value types flowing through a review run:
//! fetched files, the validated repository identity, and the review
//! request/response pair.
//!
//! ## Submodules
//!
//! - [`file`] - Fetched file types (`SourceFile`, `FileList`)
//! - [`repo`] - Repository identity and URL validation (`RepoId`)
//! - [`review`] - Review inputs and outputs (`ReviewRequest`, `ReviewResponse`)

mod file;
mod repo;
mod review;

// Re-export everything at the models level
pub use file::{FileList, SourceFile};
pub use repo::RepoId;
pub use review::{CandidateLevel, ReviewRequest, ReviewResponse};
