// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Critiq Services
//!
//! The service layer: fetching repository contents from GitHub, generating
//! reviews through OpenAI chat completions, and the workflow tying the two
//! together.
//!
//! Both clients send every request through a
//! [`critiq_http::InterceptorChain`] built over an explicitly passed
//! [`Transport`](critiq_http::Transport), so tests can substitute scripted
//! transports and production wires in
//! [`ReqwestTransport`](critiq_http::ReqwestTransport) once at startup.
//!
//! ## Modules
//!
//! - [`github`] - Repository content listing and file downloads
//! - [`openai`] - Chat-completion client and prompt assembly
//! - [`review`] - The fetch-then-review workflow
//! - [`cache`] - TTL cache over completed reviews

// Core modules
pub mod cache;
pub mod github;
pub mod openai;
pub mod review;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root

// GitHub
pub use github::{GitHubConfig, GitHubError, GitHubService};

// OpenAI
pub use openai::{OpenAiConfig, OpenAiError, OpenAiService};

// Workflow
pub use review::{ReviewError, ReviewWorkflow};

// Cache
pub use cache::ReviewCache;
