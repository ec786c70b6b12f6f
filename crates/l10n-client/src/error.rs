//! Error taxonomy for GitHub API access
//!
//! Every failure of an entry or pull request fetch surfaces as one of these
//! kinds. Nothing is retried and nothing is recovered locally: the caller
//! decides how to present the failure.

use thiserror::Error;

/// Errors returned by [`GitHubApi`](crate::GitHubApi) implementations and the
/// fetch operations built on top of them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitHubError {
    /// The requested resource does not exist (HTTP 404)
    #[error("GitHub resource not found")]
    NotFound,

    /// Access denied because the API quota is exhausted
    #[error("GitHub API rate limit exceeded, provide an access token or wait for the quota to reset")]
    RateLimited,

    /// Access denied for any other reason (HTTP 403)
    #[error("Access to the GitHub resource is forbidden")]
    Forbidden,

    /// The document was retrieved but its front matter is unusable
    #[error("Invalid metadata found in the file: {0}")]
    InvalidMetadata(String),

    /// The commit history lookup for a source entry came back empty
    #[error("No commits found in the repository")]
    NoCommitsFound,

    /// Any other non-2xx response, transport failure or undecodable body
    #[error("Unknown GitHub error: {0}")]
    Unknown(String),
}

impl GitHubError {
    /// Classify a non-successful HTTP response.
    ///
    /// `ratelimit_remaining` is the raw value of the `x-ratelimit-remaining`
    /// response header, if present.
    pub fn from_status(status: u16, ratelimit_remaining: Option<&str>) -> Self {
        match status {
            403 if ratelimit_remaining.map(str::trim) == Some("0") => GitHubError::RateLimited,
            403 => GitHubError::Forbidden,
            404 => GitHubError::NotFound,
            other => GitHubError::Unknown(format!("unexpected HTTP status {}", other)),
        }
    }

    /// True for both plain authorization failures and rate limiting
    pub fn is_forbidden(&self) -> bool {
        matches!(self, GitHubError::Forbidden | GitHubError::RateLimited)
    }
}

impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => {
                GitHubError::from_status(source.status_code.as_u16(), None)
            }
            other => GitHubError::Unknown(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for GitHubError {
    fn from(err: serde_json::Error) -> Self {
        GitHubError::Unknown(format!("failed to decode response: {}", err))
    }
}
