//! Repository identity and URL validation.
//!
//! A [`RepoId`] is the validated form of a GitHub repository URL. Parsing
//! happens once, before any network call; everything downstream works with
//! the owner/name pair instead of re-splitting strings.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ============================================================================
// URL Pattern
// ============================================================================

/// Canonical GitHub repository URL: scheme, host, owner, name, nothing else.
static REPO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([A-Za-z0-9._-]+)/([A-Za-z0-9._-]+)$")
        .expect("Invalid regex")
});

// ============================================================================
// Repository Identity
// ============================================================================

/// A validated GitHub repository identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Parses a canonical `https://github.com/{owner}/{name}` URL.
    ///
    /// Rejects anything else: other hosts, missing segments, trailing
    /// slashes, or extra path components.
    pub fn parse(url: &str) -> Result<Self, CoreError> {
        let captures = REPO_URL_RE
            .captures(url)
            .ok_or_else(|| CoreError::InvalidRepoUrl(url.to_string()))?;

        Ok(Self {
            owner: captures[1].to_string(),
            name: captures[2].to_string(),
        })
    }

    /// Returns the repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the `owner/name` path segment used by API URLs.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
