//! Companion backend client
//!
//! The backend serves pending local changes of a translation checkout:
//! which entries differ, and both sides of one entry. Everything here is
//! read-only.

use crate::entry::Entry;
use crate::front_matter::parse_lenient;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL used when none is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3030";

/// Errors talking to the companion backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend answered with a non-success status
    #[error("Failed to fetch {endpoint}: {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// Transport or JSON decoding failure
    #[error("Backend request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// One pending change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub path: String,
    pub status: String,
    #[serde(default)]
    pub source_exists: bool,
    #[serde(default)]
    pub translation_exists: bool,
}

/// Body of `GET /api/changes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangesResponse {
    pub changes: Vec<ChangeEntry>,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub base_ref: String,
}

/// One side of a pending change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSide {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub age_secs: Option<u64>,
    #[serde(default)]
    pub source_commit: Option<String>,
}

/// Body of `GET /api/diff`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResponse {
    pub path: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub source: FileSide,
    #[serde(default)]
    pub translation: FileSide,
    /// Unified diff as produced by the backend, unused by the aligner
    #[serde(default)]
    pub diff: String,
}

impl DiffResponse {
    /// Build `(translation, source)` entries for side-by-side review.
    ///
    /// Metadata is parsed leniently: a missing title becomes `""` and a
    /// missing slug falls back to the change's path.
    pub fn into_entries(self) -> (Entry, Entry) {
        let translation = parse_lenient(&self.translation.content);
        let source = parse_lenient(&self.source.content);

        let translation_entry = Entry {
            title: translation.front_matter.title().unwrap_or_default().to_string(),
            slug: translation
                .front_matter
                .slug()
                .unwrap_or(&self.path)
                .to_string(),
            source_commit: Some(
                translation
                    .front_matter
                    .source_commit()
                    .unwrap_or_default()
                    .to_string(),
            ),
            content: translation.body,
        };

        let source_entry = Entry {
            title: source.front_matter.title().unwrap_or_default().to_string(),
            slug: source.front_matter.slug().unwrap_or(&self.path).to_string(),
            source_commit: Some(self.source.source_commit.unwrap_or_default()),
            content: source.body,
        };

        (translation_entry, source_entry)
    }
}

/// HTTP client for the companion backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl BackendClient {
    /// Create a client; a blank or absent base URL selects [`DEFAULT_BACKEND_URL`]
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn changes_url(&self, locale: &str) -> String {
        format!(
            "{}/api/changes?locale={}",
            self.base_url,
            urlencoding::encode(locale)
        )
    }

    fn diff_url(&self, locale: &str, path: &str) -> String {
        format!(
            "{}/api/diff?locale={}&path={}",
            self.base_url,
            urlencoding::encode(locale),
            urlencoding::encode(path)
        )
    }

    async fn get(
        &self,
        endpoint: &'static str,
        url: &str,
    ) -> Result<reqwest::Response, BackendError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// List pending changes for `locale`
    pub async fn fetch_changes(&self, locale: &str) -> Result<Vec<ChangeEntry>, BackendError> {
        let response = self.get("changes", &self.changes_url(locale)).await?;
        let body: ChangesResponse = response.json().await?;
        info!(
            "Backend reports {} pending changes for {} (base {})",
            body.changes.len(),
            locale,
            body.base_ref
        );
        Ok(body.changes)
    }

    /// Fetch both sides of one pending change
    pub async fn fetch_diff(&self, locale: &str, path: &str) -> Result<DiffResponse, BackendError> {
        let response = self.get("diff", &self.diff_url(locale, path)).await?;
        Ok(response.json().await?)
    }
}
