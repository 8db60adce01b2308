//! Environment-based credentials.

use anyhow::{Context, Result};

/// Environment variable holding the GitHub API token.
pub const GITHUB_KEY_VAR: &str = "GITHUB_API_KEY";

/// Environment variable holding the OpenAI API key.
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// API credentials for both backing services.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Token sent to GitHub as `Authorization: token <...>`.
    pub github_token: String,
    /// Key sent to OpenAI as `Authorization: Bearer <...>`.
    pub openai_api_key: String,
}

impl Credentials {
    /// Reads both credentials from the environment.
    ///
    /// Fails naming the missing variable, before any network work starts.
    pub fn from_env() -> Result<Self> {
        let github_token =
            std::env::var(GITHUB_KEY_VAR).with_context(|| format!("{GITHUB_KEY_VAR} is not set"))?;
        let openai_api_key =
            std::env::var(OPENAI_KEY_VAR).with_context(|| format!("{OPENAI_KEY_VAR} is not set"))?;

        Ok(Self {
            github_token,
            openai_api_key,
        })
    }
}
