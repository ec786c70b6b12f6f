//! GitHub client trait
//!
//! One method per REST endpoint the fetchers consume. The entry and pull
//! request logic is written against this trait, so it runs unchanged on top
//! of [`OctocrabClient`](crate::OctocrabClient) or an in-memory fake.

use crate::error::GitHubError;
use crate::types::{
    CommitRef, FileContent, Label, PullDetails, PullFile, RepoRef, SearchItem, SearchSort,
    SortOrder,
};
use async_trait::async_trait;

/// Query parameters of an issue search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Fully built search query (`repo:... is:pr ...`)
    pub query: String,
    pub sort: SearchSort,
    pub order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

/// Read-only access to the GitHub REST API
///
/// Authentication is a property of the implementation, fixed when it is
/// constructed. Every method maps non-2xx responses through
/// [`GitHubError::from_status`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so fetches can run on any task.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetch a file through the contents API
    ///
    /// # Arguments
    ///
    /// * `repo` - Repository coordinates
    /// * `path` - Repository-relative file path
    /// * `git_ref` - Branch, tag or commit to read from
    async fn get_file_content(
        &self,
        repo: &RepoRef,
        path: &str,
        git_ref: &str,
    ) -> Result<FileContent, GitHubError>;

    /// List commits touching `path` on `sha`, most recent first
    async fn list_commits(
        &self,
        repo: &RepoRef,
        path: &str,
        sha: &str,
    ) -> Result<Vec<CommitRef>, GitHubError>;

    /// Fetch a single pull request
    async fn get_pull_request(
        &self,
        repo: &RepoRef,
        number: u64,
    ) -> Result<PullDetails, GitHubError>;

    /// List the files changed by a pull request (single page)
    async fn list_pull_request_files(
        &self,
        repo: &RepoRef,
        number: u64,
        per_page: u32,
    ) -> Result<Vec<PullFile>, GitHubError>;

    /// Run an issue search and return the items of the requested page
    async fn search_issues(&self, request: &SearchRequest) -> Result<Vec<SearchItem>, GitHubError>;

    /// Fetch one page of repository labels
    async fn list_labels(
        &self,
        repo: &RepoRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Label>, GitHubError>;
}
