//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubApi` trait using the octocrab library.
//! Responses are read raw rather than through `Octocrab::get`, because a 403
//! has to be told apart from rate limiting by its `x-ratelimit-remaining`
//! header, which octocrab's error type does not carry.

use crate::client::{GitHubApi, SearchRequest};
use crate::error::GitHubError;
use crate::types::{
    CommitRef, FileContent, Label, PullDetails, PullFile, RepoRef, SearchItem, SearchResponse,
};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const RATELIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client for api.github.com, anonymous when `token` is `None`
    pub fn from_token(token: Option<&str>) -> Result<Self, GitHubError> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            builder = builder.personal_token(token.trim().to_string());
        } else {
            debug!("No access token configured, using anonymous GitHub access");
        }
        let octocrab = builder.build()?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }

    /// GET `route` and decode the JSON body, classifying failures
    async fn get_json<T: DeserializeOwned>(&self, route: String) -> Result<T, GitHubError> {
        debug!("GET {}", route);
        let response = self.octocrab._get(route.as_str()).await?;

        let status = response.status();
        if !status.is_success() {
            let remaining = response
                .headers()
                .get(RATELIMIT_REMAINING_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            debug!(
                "GET {} failed with {} (rate limit remaining: {:?})",
                route, status, remaining
            );
            return Err(GitHubError::from_status(status.as_u16(), remaining.as_deref()));
        }

        let body = self.octocrab.body_to_string(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Percent-encode every segment of a slash-separated path
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Render `key=value` pairs as a query string
fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn repo_route(repo: &RepoRef) -> String {
    format!(
        "/repos/{}/{}",
        urlencoding::encode(&repo.owner),
        urlencoding::encode(&repo.repo)
    )
}

#[async_trait]
impl GitHubApi for OctocrabClient {
    async fn get_file_content(
        &self,
        repo: &RepoRef,
        path: &str,
        git_ref: &str,
    ) -> Result<FileContent, GitHubError> {
        debug!("Fetching {} from {} @ {}", path, repo, git_ref);
        let route = format!(
            "{}/contents/{}?{}",
            repo_route(repo),
            encode_path(path),
            query_string(&[("ref", git_ref.to_string())])
        );
        self.get_json(route).await
    }

    async fn list_commits(
        &self,
        repo: &RepoRef,
        path: &str,
        sha: &str,
    ) -> Result<Vec<CommitRef>, GitHubError> {
        debug!("Fetching commits for {} in {} @ {}", path, repo, sha);
        let route = format!(
            "{}/commits?{}",
            repo_route(repo),
            query_string(&[("path", path.to_string()), ("sha", sha.to_string())])
        );
        self.get_json(route).await
    }

    async fn get_pull_request(
        &self,
        repo: &RepoRef,
        number: u64,
    ) -> Result<PullDetails, GitHubError> {
        debug!("Fetching PR #{} in {}", number, repo);
        self.get_json(format!("{}/pulls/{}", repo_route(repo), number))
            .await
    }

    async fn list_pull_request_files(
        &self,
        repo: &RepoRef,
        number: u64,
        per_page: u32,
    ) -> Result<Vec<PullFile>, GitHubError> {
        debug!("Fetching files of PR #{} in {}", number, repo);
        let route = format!(
            "{}/pulls/{}/files?{}",
            repo_route(repo),
            number,
            query_string(&[("per_page", per_page.to_string())])
        );
        self.get_json(route).await
    }

    async fn search_issues(&self, request: &SearchRequest) -> Result<Vec<SearchItem>, GitHubError> {
        debug!("Searching issues: {}", request.query);
        let route = format!(
            "/search/issues?{}",
            query_string(&[
                ("q", request.query.clone()),
                ("sort", request.sort.as_str().to_string()),
                ("order", request.order.as_str().to_string()),
                ("page", request.page.to_string()),
                ("per_page", request.per_page.to_string()),
            ])
        );
        let response: SearchResponse = self.get_json(route).await?;
        Ok(response.items)
    }

    async fn list_labels(
        &self,
        repo: &RepoRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Label>, GitHubError> {
        debug!("Fetching labels page {} of {}", page, repo);
        let route = format!(
            "{}/labels?{}",
            repo_route(repo),
            query_string(&[("page", page.to_string()), ("per_page", per_page.to_string())])
        );
        self.get_json(route).await
    }
}
