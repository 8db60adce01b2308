//! Review generation through OpenAI chat completions.
//!
//! # API Endpoint
//!
//! ```text
//! POST https://api.openai.com/v1/chat/completions
//! Authorization: Bearer <api key>
//! ```
//!
//! # Response Format
//!
//! ```json
//! {
//!   "choices": [
//!     {"message": {"role": "assistant", "content": "The code is..."}}
//!   ]
//! }
//! ```

mod error;
mod prompt;
mod wire;

use std::sync::Arc;

use tracing::{debug, instrument};

use critiq_core::{CandidateLevel, FileList};
use critiq_http::retry::{DEFAULT_BACKOFF_FACTOR, DEFAULT_MAX_RETRIES};
use critiq_http::{
    Headers, InterceptorChain, LoggingInterceptor, Request, RetryInterceptor, ServerErrorRetry,
    StatusCode, Transport,
};

pub use error::OpenAiError;
pub use wire::{ChatCompletion, ChatMessage, ChatRequest, Choice, ChoiceMessage};

// ============================================================================
// Constants
// ============================================================================

/// Chat completions endpoint.
pub const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model used for reviews.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

// ============================================================================
// Configuration
// ============================================================================

/// Settings for [`OpenAiService`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Completions endpoint URL.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Retry ceiling for server errors.
    pub max_retries: u32,
    /// Exponential base of the backoff schedule.
    pub backoff_factor: f64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
        }
    }
}

// ============================================================================
// Service
// ============================================================================

/// Client generating code reviews from repository files.
pub struct OpenAiService {
    config: OpenAiConfig,
    headers: Headers,
    chain: InterceptorChain,
}

impl OpenAiService {
    /// Creates a service against the public OpenAI API.
    pub fn new(api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self::with_config(OpenAiConfig::default(), api_key, transport)
    }

    /// Creates a service with explicit configuration.
    pub fn with_config(
        config: OpenAiConfig,
        api_key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let mut headers = Headers::new();
        headers.insert("Authorization", format!("Bearer {}", api_key.into()));

        let chain = InterceptorChain::new(vec![
            Box::new(LoggingInterceptor::new()),
            Box::new(RetryInterceptor::new(
                Box::new(ServerErrorRetry::new(
                    config.max_retries,
                    config.backoff_factor,
                )),
                transport,
            )),
        ]);

        Self {
            config,
            headers,
            chain,
        }
    }

    /// Generates a review of the given files.
    ///
    /// Sends one completion request. Transient server errors are retried
    /// inside the chain; a response that decodes badly is surfaced without
    /// another network call.
    #[instrument(skip(self, description, files), fields(file_count = files.len()))]
    pub async fn generate_review(
        &self,
        description: &str,
        files: &FileList,
        level: CandidateLevel,
    ) -> Result<String, OpenAiError> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt::build_prompt(
                description,
                files,
                level,
            ))],
        };

        let request = Request::post(&self.config.api_url)
            .headers(&self.headers)
            .json(&body)
            .build()?;

        let response = self.chain.send(&request).await?;

        if response.status() != StatusCode::OK {
            return Err(OpenAiError::Api {
                status: response.status(),
                body: response.text().into_owned(),
            });
        }

        let completion: ChatCompletion = response.json()?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiError::EmptyChoices)?;

        debug!(len = choice.message.content.len(), "Review generated");
        Ok(choice.message.content)
    }
}

// ============================================================================
// Tests
// ============================================================================
