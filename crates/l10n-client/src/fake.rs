//! In-memory `GitHubApi` used by the fetcher tests

use crate::client::{GitHubApi, SearchRequest};
use crate::error::GitHubError;
use crate::types::{
    CommitRef, FileContent, Label, PullDetails, PullFile, RepoRef, SearchItem,
};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeGitHub {
    files: HashMap<(RepoRef, String), String>,
    commits: HashMap<(RepoRef, String), Vec<CommitRef>>,
    pulls: HashMap<(RepoRef, u64), (PullDetails, Vec<PullFile>)>,
    search_items: Vec<SearchItem>,
    labels: Vec<Label>,
    failure: Option<GitHubError>,
    commit_lookups: Mutex<usize>,
    label_pages: Mutex<Vec<u32>>,
    searches: Mutex<Vec<SearchRequest>>,
    file_page_sizes: Mutex<Vec<u32>>,
}

impl FakeGitHub {
    /// Serve `text` (base64-encoded, wrapped like the real API) for `path`
    pub fn with_file(mut self, repo: &RepoRef, path: &str, text: &str) -> Self {
        let encoded = STANDARD.encode(text);
        let wrapped = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("\n");
        self.files.insert((repo.clone(), path.to_string()), wrapped);
        self
    }

    pub fn with_commits(mut self, repo: &RepoRef, path: &str, commits: Vec<CommitRef>) -> Self {
        self.commits.insert((repo.clone(), path.to_string()), commits);
        self
    }

    pub fn with_pull(mut self, repo: &RepoRef, details: PullDetails, files: Vec<PullFile>) -> Self {
        self.pulls.insert((repo.clone(), details.number), (details, files));
        self
    }

    pub fn with_search_items(mut self, items: Vec<SearchItem>) -> Self {
        self.search_items = items;
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }

    /// Make every call fail with `error`
    pub fn failing_with(mut self, error: GitHubError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn commit_lookups(&self) -> usize {
        *self.commit_lookups.lock().unwrap()
    }

    pub fn label_pages(&self) -> Vec<u32> {
        self.label_pages.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<SearchRequest> {
        self.searches.lock().unwrap().clone()
    }

    pub fn file_page_sizes(&self) -> Vec<u32> {
        self.file_page_sizes.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), GitHubError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn get_file_content(
        &self,
        repo: &RepoRef,
        path: &str,
        _git_ref: &str,
    ) -> Result<FileContent, GitHubError> {
        self.check_failure()?;
        self.files
            .get(&(repo.clone(), path.to_string()))
            .map(|content| FileContent {
                content: content.clone(),
                encoding: "base64".to_string(),
            })
            .ok_or(GitHubError::NotFound)
    }

    async fn list_commits(
        &self,
        repo: &RepoRef,
        path: &str,
        _sha: &str,
    ) -> Result<Vec<CommitRef>, GitHubError> {
        self.check_failure()?;
        *self.commit_lookups.lock().unwrap() += 1;
        Ok(self
            .commits
            .get(&(repo.clone(), path.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn get_pull_request(
        &self,
        repo: &RepoRef,
        number: u64,
    ) -> Result<PullDetails, GitHubError> {
        self.check_failure()?;
        self.pulls
            .get(&(repo.clone(), number))
            .map(|(details, _)| details.clone())
            .ok_or(GitHubError::NotFound)
    }

    async fn list_pull_request_files(
        &self,
        repo: &RepoRef,
        number: u64,
        per_page: u32,
    ) -> Result<Vec<PullFile>, GitHubError> {
        self.check_failure()?;
        self.file_page_sizes.lock().unwrap().push(per_page);
        self.pulls
            .get(&(repo.clone(), number))
            .map(|(_, files)| files.clone())
            .ok_or(GitHubError::NotFound)
    }

    async fn search_issues(&self, request: &SearchRequest) -> Result<Vec<SearchItem>, GitHubError> {
        self.check_failure()?;
        self.searches.lock().unwrap().push(request.clone());
        Ok(self.search_items.clone())
    }

    async fn list_labels(
        &self,
        _repo: &RepoRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Label>, GitHubError> {
        self.check_failure()?;
        self.label_pages.lock().unwrap().push(page);
        let start = ((page.saturating_sub(1)) * per_page) as usize;
        Ok(self
            .labels
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect())
    }
}
