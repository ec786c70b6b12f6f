//! GitHub API data transfer objects
//!
//! Only the fields the fetchers read are modelled. These types mirror the
//! REST payloads; the domain models built from them live next to the fetch
//! logic ([`Entry`](crate::Entry), [`PullRequest`](crate::PullRequest)).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    /// Owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Body of `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileContent {
    /// Encoded file body
    #[serde(default)]
    pub content: String,
    /// Transport encoding, `"base64"` for regular files
    #[serde(default)]
    pub encoding: String,
}

/// One element of `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// A GitHub account as embedded in other payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
}

/// Body of `GET /repos/{owner}/{repo}/pulls/{number}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullDetails {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub head: PullHead,
}

/// Head side of a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullHead {
    /// Head branch name
    #[serde(rename = "ref")]
    pub ref_field: String,
    /// Head repository; `None` once a fork has been deleted
    pub repo: Option<HeadRepository>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadRepository {
    pub owner: Account,
}

/// One element of `GET /repos/{owner}/{repo}/pulls/{number}/files`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullFile {
    pub filename: String,
    /// `added`, `modified`, `removed`, `renamed`, ...
    pub status: String,
}

/// Body of `GET /search/issues`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A single issue search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub user: Option<Account>,
    #[serde(default)]
    pub labels: Vec<SearchLabel>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Labels come back as objects, older payloads used plain names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchLabel {
    Name(String),
    Object { name: String },
}

impl SearchLabel {
    pub fn name(&self) -> &str {
        match self {
            SearchLabel::Name(name) | SearchLabel::Object { name } => name,
        }
    }
}

/// A repository label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// Hex color without the leading `#`
    #[serde(default)]
    pub color: String,
}

/// Sort key for pull request search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSort {
    Created,
    #[default]
    Updated,
}

impl SearchSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSort::Created => "created",
            SearchSort::Updated => "updated",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}
