//! GitHub repository content fetching.
//!
//! # API Endpoints
//!
//! ```text
//! GET {base}/repos/{owner}/{name}/contents/   directory listing
//! GET {download_url}                          raw file content
//! Authorization: token <api key>
//! ```
//!
//! # Listing Format
//!
//! ```json
//! [
//!   {"type": "file", "path": "README.md", "url": "...", "download_url": "..."},
//!   {"type": "dir",  "path": "src", "url": "...", "download_url": null}
//! ]
//! ```

mod error;
mod wire;

use std::sync::Arc;

use tracing::{debug, instrument};

use critiq_core::{FileList, RepoId, SourceFile};
use critiq_http::{
    Headers, InterceptorChain, LoggingInterceptor, RateLimitRetry, Request, Response,
    RetryInterceptor, StatusCode, Transport,
};

pub use error::GitHubError;
pub use wire::{ContentEntry, EntryKind};

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the GitHub REST API.
pub const API_BASE_URL: &str = "https://api.github.com";

/// Media type pinning v3 of the contents API.
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// User agent sent with every request; GitHub rejects anonymous clients.
pub const USER_AGENT: &str = concat!("critiq/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Configuration
// ============================================================================

/// Settings for [`GitHubService`].
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL of the REST API.
    pub base_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }
}

// ============================================================================
// Walk
// ============================================================================

/// Pending step of the content-tree walk.
///
/// Directory entries are pushed onto a stack in reverse listing order, so
/// popping yields the same sequence a depth-first recursion would visit.
enum WalkTask {
    Listing(String),
    Content { path: String, download_url: String },
}

// ============================================================================
// Service
// ============================================================================

/// Client for listing and downloading repository contents.
pub struct GitHubService {
    config: GitHubConfig,
    headers: Headers,
    chain: InterceptorChain,
}

impl GitHubService {
    /// Creates a service against the public GitHub API.
    pub fn new(api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self::with_config(GitHubConfig::default(), api_key, transport)
    }

    /// Creates a service with explicit configuration.
    pub fn with_config(
        config: GitHubConfig,
        api_key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let mut headers = Headers::new();
        headers.insert("Authorization", format!("token {}", api_key.into()));
        headers.insert("Accept", ACCEPT_HEADER);
        headers.insert("User-Agent", USER_AGENT);

        let chain = InterceptorChain::new(vec![
            Box::new(LoggingInterceptor::new()),
            Box::new(RetryInterceptor::new(
                Box::new(RateLimitRetry::new()),
                transport,
            )),
        ]);

        Self {
            config,
            headers,
            chain,
        }
    }

    /// Fetches every file in the repository.
    ///
    /// Walks the content tree depth first: each directory's entries are
    /// visited in the order the API lists them, descending into a
    /// subdirectory the moment it appears. An empty repository yields an
    /// empty list, not an error.
    #[instrument(skip(self), fields(repo = %repo))]
    pub async fn fetch_repository(&self, repo: &RepoId) -> Result<FileList, GitHubError> {
        let root = format!(
            "{}/repos/{}/contents/",
            self.config.base_url,
            repo.full_name()
        );

        let mut files = FileList::new();
        let mut stack = vec![WalkTask::Listing(root)];

        while let Some(task) = stack.pop() {
            match task {
                WalkTask::Listing(url) => {
                    let entries = self.list_directory(&url).await?;
                    // Reversed so the stack pops them in listing order.
                    for entry in entries.into_iter().rev() {
                        match entry.kind {
                            EntryKind::File => {
                                let Some(download_url) = entry.download_url else {
                                    return Err(GitHubError::MissingDownloadUrl {
                                        path: entry.path,
                                    });
                                };
                                stack.push(WalkTask::Content {
                                    path: entry.path,
                                    download_url,
                                });
                            }
                            EntryKind::Dir => stack.push(WalkTask::Listing(entry.url)),
                            EntryKind::Other => {
                                debug!(path = %entry.path, "Skipping non-file entry");
                            }
                        }
                    }
                }
                WalkTask::Content { path, download_url } => {
                    let content = self.download_file(&download_url).await?;
                    files.push(SourceFile::new(path, content));
                }
            }
        }

        debug!(count = files.len(), "Repository fetched");
        Ok(files)
    }

    async fn list_directory(&self, url: &str) -> Result<Vec<ContentEntry>, GitHubError> {
        let response = self.get(url).await?;
        Ok(response.json()?)
    }

    async fn download_file(&self, url: &str) -> Result<String, GitHubError> {
        let response = self.get(url).await?;
        Ok(response.text().into_owned())
    }

    async fn get(&self, url: &str) -> Result<Response, GitHubError> {
        let request = Request::get(url).headers(&self.headers).build()?;
        let response = self.chain.send(&request).await?;

        if response.status() != StatusCode::OK {
            return Err(GitHubError::Api {
                status: response.status(),
                body: response.text().into_owned(),
            });
        }

        Ok(response)
    }
}

// ============================================================================
// Tests
// ============================================================================
