//! Localized documentation review client
//!
//! This crate fetches translated documentation entries, their English
//! sources and the pull requests that change them. GitHub access goes
//! through a trait so the fetch logic is independent of the HTTP layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  fetch_entry / fetch_pull_request / search   │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │              GitHubApi trait                 │
//! │  - get_file_content()  - list_commits()      │
//! │  - get_pull_request()  - search_issues() ... │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              └─────────────────┘
//! ```
//!
//! Pending local changes come from a separate companion backend
//! ([`BackendClient`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use l10n_client::{fetch_entry, EntryLocation, OctocrabClient, RepoRef};
//!
//! # async fn example() -> Result<(), l10n_client::GitHubError> {
//! let client = OctocrabClient::from_token(None)?;
//! let location = EntryLocation::new(
//!     RepoRef::new("mdn", "translated-content"),
//!     "main",
//!     "web/api/fetch_api",
//!     "zh-cn",
//! );
//! let entry = fetch_entry(&client, &location).await?;
//! println!("{} ({:?})", entry.title, entry.source_commit);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod decode;
pub mod entry;
pub mod error;
pub mod front_matter;
pub mod octocrab_client;
pub mod path;
pub mod pull_request;
pub mod types;

#[cfg(test)]
mod canned_http;
#[cfg(test)]
mod fake;

pub use backend::{BackendClient, BackendError, ChangeEntry, DiffResponse, FileSide};
pub use client::{GitHubApi, SearchRequest};
pub use entry::{fetch_entry, Entry, EntryLocation, NO_SOURCE_COMMIT, SOURCE_LOCALE};
pub use error::GitHubError;
pub use octocrab_client::OctocrabClient;
pub use path::{content_path, decompose, LocalizedPath};
pub use pull_request::{
    build_search_query, fetch_labels, fetch_pull_request, search_open_pull_requests,
    ChangedFile, PrSummary, PullRequest, SearchOptions,
};
pub use types::{Label, RepoRef, SearchSort, SortOrder};
