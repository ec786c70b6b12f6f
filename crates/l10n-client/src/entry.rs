//! Entry retrieval
//!
//! An entry is one documentation page: its title, slug, the commit it
//! relates to and the Markdown body without front matter.

use crate::client::GitHubApi;
use crate::decode::decode_base64_utf8;
use crate::error::GitHubError;
use crate::front_matter::{split_front_matter, FrontMatter};
use crate::path::content_path;
use crate::types::RepoRef;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Locale of the source (English) content
pub const SOURCE_LOCALE: &str = "en-us";

/// Source commit reported for a translation that does not record one
pub const NO_SOURCE_COMMIT: &str = "no source commit yet";

/// Title shown for the placeholder of a side that does not exist
pub const MISSING_ENTRY_TITLE: &str = "File not existed";

/// A documentation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub slug: String,
    /// For a translation: the source commit it was translated from.
    /// For a source entry: the latest commit touching the file.
    pub source_commit: Option<String>,
    /// Body with the front matter removed, trimmed
    pub content: String,
}

impl Entry {
    /// Placeholder for a comparison side that could not be fetched
    pub fn missing() -> Self {
        Self {
            title: MISSING_ENTRY_TITLE.to_string(),
            slug: String::new(),
            source_commit: None,
            content: String::new(),
        }
    }
}

/// Where an entry lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLocation {
    pub repo: RepoRef,
    pub branch: String,
    /// Logical path below the locale, e.g. `web/api/fetch`
    pub path: String,
    pub locale: String,
}

impl EntryLocation {
    pub fn new(
        repo: RepoRef,
        branch: impl Into<String>,
        path: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            branch: branch.into(),
            path: path.into(),
            locale: locale.into(),
        }
    }

    /// Repository-relative path of the entry's `index.md`
    pub fn file_path(&self) -> String {
        content_path(&self.locale, &self.path)
    }

    pub fn is_source(&self) -> bool {
        self.locale == SOURCE_LOCALE
    }
}

/// Validated metadata and body of a decoded document
#[derive(Debug, Clone, PartialEq, Eq)]
struct Document {
    front_matter: FrontMatter,
    title: String,
    slug: String,
    body: String,
}

fn parse_document(text: &str) -> Result<Document, GitHubError> {
    let (block, body) = split_front_matter(text)
        .ok_or_else(|| GitHubError::InvalidMetadata("no metadata found in the file".into()))?;

    let front_matter =
        FrontMatter::parse(block).map_err(|e| GitHubError::InvalidMetadata(e.to_string()))?;

    let title = front_matter
        .title()
        .ok_or_else(|| GitHubError::InvalidMetadata("missing title".into()))?
        .to_string();
    let slug = front_matter
        .slug()
        .ok_or_else(|| GitHubError::InvalidMetadata("missing slug".into()))?
        .to_string();

    Ok(Document {
        title,
        slug,
        body: body.to_string(),
        front_matter,
    })
}

/// Fetch one entry.
///
/// Translations take their source commit from the `l10n.sourceCommit`
/// front matter key. Source entries look up the most recent commit touching
/// the file on the same branch.
pub async fn fetch_entry<C>(client: &C, location: &EntryLocation) -> Result<Entry, GitHubError>
where
    C: GitHubApi + ?Sized,
{
    let file_path = location.file_path();
    debug!(
        "Fetching entry {} from {} @ {}",
        file_path, location.repo, location.branch
    );

    let file = client
        .get_file_content(&location.repo, &file_path, &location.branch)
        .await?;
    if !file.encoding.is_empty() && file.encoding != "base64" {
        return Err(GitHubError::Unknown(format!(
            "unsupported content encoding '{}'",
            file.encoding
        )));
    }
    let text =
        decode_base64_utf8(&file.content).map_err(|e| GitHubError::Unknown(e.to_string()))?;

    let document = parse_document(&text)?;

    let source_commit = if location.is_source() {
        let commits = client
            .list_commits(&location.repo, &file_path, &location.branch)
            .await?;
        let latest = commits.into_iter().next().ok_or(GitHubError::NoCommitsFound)?;
        latest.sha
    } else {
        document
            .front_matter
            .source_commit()
            .unwrap_or(NO_SOURCE_COMMIT)
            .to_string()
    };

    info!(
        "Fetched entry '{}' ({}) at commit {}",
        document.slug, location.locale, source_commit
    );

    Ok(Entry {
        title: document.title,
        slug: document.slug,
        source_commit: Some(source_commit),
        content: document.body,
    })
}
