//! The fetch-then-review workflow.

use thiserror::Error;
use tracing::{debug, instrument};

use critiq_core::{ReviewRequest, ReviewResponse};

use crate::cache::ReviewCache;
use crate::github::{GitHubError, GitHubService};
use crate::openai::{OpenAiError, OpenAiService};

// ============================================================================
// Errors
// ============================================================================

/// Errors from the review workflow.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The repository listed no files to review.
    #[error("No reviewable files found in the repository")]
    NoFiles,

    /// Fetching repository contents failed.
    #[error("Repository fetch failed: {0}")]
    Github(#[from] GitHubError),

    /// Generating the review failed.
    #[error("Review generation failed: {0}")]
    OpenAi(#[from] OpenAiError),
}

// ============================================================================
// Workflow
// ============================================================================

/// Orchestrates fetch, prompt, completion, and caching.
pub struct ReviewWorkflow {
    github: GitHubService,
    openai: OpenAiService,
    cache: Option<ReviewCache>,
}

impl ReviewWorkflow {
    /// Creates a workflow without caching.
    pub fn new(github: GitHubService, openai: OpenAiService) -> Self {
        Self {
            github,
            openai,
            cache: None,
        }
    }

    /// Creates a workflow that caches completed reviews.
    pub fn with_cache(github: GitHubService, openai: OpenAiService, cache: ReviewCache) -> Self {
        Self {
            github,
            openai,
            cache: Some(cache),
        }
    }

    /// Runs one review end to end.
    ///
    /// A cached response for an identical request is returned without any
    /// network traffic. A repository with no files fails before the
    /// completion request is made.
    #[instrument(skip(self, request), fields(repo = %request.repository, level = %request.level))]
    pub async fn execute(&self, request: &ReviewRequest) -> Result<ReviewResponse, ReviewError> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(request) {
                debug!("Serving cached review");
                return Ok(hit);
            }
        }

        let files = self.github.fetch_repository(&request.repository).await?;
        if files.is_empty() {
            return Err(ReviewError::NoFiles);
        }

        let review = self
            .openai
            .generate_review(&request.description, &files, request.level)
            .await?;

        let response = ReviewResponse::new(review, files.names());

        if let Some(cache) = &self.cache {
            cache.insert(request.clone(), response.clone());
        }

        Ok(response)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use critiq_core::{CandidateLevel, RepoId};

    use super::*;
    use crate::github::GitHubConfig;
    use crate::openai::OpenAiConfig;
    use crate::testing::{self, ScriptedTransport};

    const ROOT: &str = "https://gh.test/repos/acme/widget/contents/";
    const API: &str = "https://ai.test/v1/chat/completions";

    fn build_workflow(
        transport: &Arc<ScriptedTransport>,
        cache: Option<ReviewCache>,
    ) -> ReviewWorkflow {
        let github = GitHubService::with_config(
            GitHubConfig {
                base_url: "https://gh.test".to_string(),
            },
            "gh-key",
            transport.clone(),
        );
        let openai = OpenAiService::with_config(
            OpenAiConfig {
                api_url: API.to_string(),
                ..OpenAiConfig::default()
            },
            "sk-test",
            transport.clone(),
        );

        match cache {
            Some(cache) => ReviewWorkflow::with_cache(github, openai, cache),
            None => ReviewWorkflow::new(github, openai),
        }
    }

    fn request() -> ReviewRequest {
        ReviewRequest {
            repository: RepoId::parse("https://github.com/acme/widget").unwrap(),
            description: "Build a widget".to_string(),
            level: CandidateLevel::Middle,
        }
    }

    fn script_happy_path(transport: &ScriptedTransport) {
        transport.script(
            ROOT,
            vec![testing::json(
                200,
                &json!([{
                    "type": "file",
                    "path": "main.rs",
                    "url": "https://gh.test/repos/acme/widget/contents/main.rs",
                    "download_url": "https://raw.test/main.rs",
                }]),
            )],
        );
        transport.script(
            "https://raw.test/main.rs",
            vec![testing::text(200, "fn main() {}")],
        );
        transport.script(
            API,
            vec![testing::json(
                200,
                &json!({
                    "choices": [{"message": {"role": "assistant", "content": "Quite nice."}}]
                }),
            )],
        );
    }

    #[tokio::test]
    async fn test_executes_fetch_then_review() {
        let transport = Arc::new(ScriptedTransport::new());
        script_happy_path(&transport);

        let response = build_workflow(&transport, None)
            .execute(&request())
            .await
            .unwrap();

        assert_eq!(response.review, "Quite nice.");
        assert_eq!(response.files, vec!["main.rs"]);
        // Listing, download, completion.
        assert_eq!(transport.dispatches(), 3);
    }

    #[tokio::test]
    async fn test_empty_repository_refuses_review() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.script(ROOT, vec![testing::json(200, &json!([]))]);

        let err = build_workflow(&transport, None)
            .execute(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::NoFiles));
        // The completion endpoint is never contacted.
        assert_eq!(transport.dispatches(), 1);
    }

    #[tokio::test]
    async fn test_cache_short_circuits_repeat_requests() {
        let transport = Arc::new(ScriptedTransport::new());
        script_happy_path(&transport);

        let workflow = build_workflow(&transport, Some(ReviewCache::new()));

        let first = workflow.execute(&request()).await.unwrap();
        assert_eq!(transport.dispatches(), 3);

        let second = workflow.execute(&request()).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(transport.dispatches(), 3);
    }

    #[tokio::test]
    async fn test_github_errors_pass_through() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.script(
            ROOT,
            vec![testing::json(404, &json!({"message": "Not Found"}))],
        );

        let err = build_workflow(&transport, None)
            .execute(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Github(_)));
    }
}
