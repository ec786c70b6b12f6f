//! Subcommand implementations

pub mod compare;
pub mod labels;
pub mod pending;
pub mod pr;
pub mod search;

use crate::view;
use anyhow::{Context as _, Result};
use l10n_client::{
    decompose, Entry, EntryLocation, OctocrabClient, RepoRef, SOURCE_LOCALE,
};
use l10n_config::{Preferences, RepoSpec};
use l10n_diff::{align, AlignOptions, AlignedPair};
use serde::Serialize;

/// Settings shared by every subcommand
#[derive(Debug, Clone)]
pub struct Context {
    pub preferences: Preferences,
    pub options: AlignOptions,
    /// Total output width in terminal cells
    pub width: usize,
    pub json: bool,
}

impl Context {
    /// GitHub client authenticated with the resolved token, if any
    pub fn github(&self) -> Result<OctocrabClient> {
        let token = self.preferences.resolve_token();
        if token.is_none() {
            log::warn!("No GitHub token found, requests are subject to anonymous rate limits");
        }
        OctocrabClient::from_token(token.as_deref()).context("Failed to initialize GitHub client")
    }

    pub fn translation_repo(&self) -> RepoRef {
        repo_ref(&self.preferences.repositories.translation)
    }

    /// Location of the English source of `path`
    pub fn source_location(&self, path: &str) -> EntryLocation {
        EntryLocation::new(
            repo_ref(&self.preferences.repositories.source),
            self.preferences.repositories.source_branch.clone(),
            path,
            SOURCE_LOCALE,
        )
    }

    /// Browser link to the source file of `path`
    pub fn source_link(&self, path: &str) -> String {
        let location = self.source_location(path);
        format!(
            "https://github.com/{}/blob/{}/{}",
            location.repo,
            location.branch,
            location.file_path()
        )
    }

    /// Print a comparison of two entries, as text or JSON
    pub fn print_comparison(
        &self,
        locale: &str,
        path: &str,
        localized: &Entry,
        source: &Entry,
    ) -> Result<()> {
        let rows = align(&localized.content, &source.content, &self.options);

        if self.json {
            let report = ComparisonReport {
                locale,
                path,
                localized,
                source,
                rows: &rows,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let link = self.source_link(path);
        print!(
            "{}",
            view::render_comparison(localized, source, locale, Some(&link), &rows, self.width)
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    locale: &'a str,
    path: &'a str,
    localized: &'a Entry,
    source: &'a Entry,
    rows: &'a [AlignedPair],
}

pub fn repo_ref(spec: &RepoSpec) -> RepoRef {
    RepoRef::new(spec.owner.clone(), spec.repo.clone())
}

/// Accept either a logical path (`web/api/fetch`) or a repository path
/// (`files/zh-cn/web/api/fetch/index.md`). A repository path also supplies
/// the locale unless one was given explicitly.
pub fn resolve_target(
    path: &str,
    locale: Option<&str>,
    default_locale: &str,
) -> (String, String) {
    let trimmed = path.trim();
    match decompose(trimmed) {
        Some(decomposed) => {
            let locale = locale.map(str::to_string).unwrap_or(decomposed.locale);
            (decomposed.path, locale)
        }
        None => {
            let locale = locale.unwrap_or(default_locale).to_string();
            (trimmed.trim_matches('/').to_string(), locale)
        }
    }
}

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
