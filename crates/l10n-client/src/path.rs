//! Repository path classification
//!
//! Localized content lives at `files/{locale}/{logical/path}/index.md`.
//! Anything else in a pull request (READMEs, CI config, images) is not an
//! entry and gets rejected here.

use serde::{Deserialize, Serialize};

const CONTENT_PREFIX: &str = "files/";
const CONTENT_SUFFIX: &str = "/index.md";

/// The `(locale, logical path)` pair extracted from a content file path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedPath {
    /// Locale segment (e.g. `zh-cn`), exactly as it appears in the path
    pub locale: String,
    /// Logical path below the locale (e.g. `web/api/fetch`)
    pub path: String,
}

impl LocalizedPath {
    pub fn new(locale: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            path: path.into(),
        }
    }

    /// Re-encode as a repository-relative file path
    pub fn to_repo_path(&self) -> String {
        content_path(&self.locale, &self.path)
    }
}

/// Build the repository-relative path of an entry's `index.md`
pub fn content_path(locale: &str, path: &str) -> String {
    format!("{CONTENT_PREFIX}{locale}/{path}{CONTENT_SUFFIX}")
}

/// Split a repository path into locale and logical path.
///
/// Returns `None` for paths outside the localized content tree. No
/// normalization is applied: case, percent-escapes and empty segments are
/// kept as they are.
pub fn decompose(path: &str) -> Option<LocalizedPath> {
    let middle = path
        .strip_prefix(CONTENT_PREFIX)?
        .strip_suffix(CONTENT_SUFFIX)?;

    let (locale, rest) = middle.split_once('/').unwrap_or((middle, ""));
    Some(LocalizedPath::new(locale, rest))
}
