//! Review preferences
//!
//! Preferences loaded from `.l10n-review.toml`. Every key is optional.
//!
//! ```toml
//! access_token = "ghp_..."
//! backend_url = "http://localhost:3030"
//! locale = "zh-cn"
//!
//! [compare]
//! split_method = "double"
//! markdown_lists = true
//! markdown_blockquotes = true
//!
//! [repositories]
//! translation = "mdn/translated-content"
//! source = "mdn/content"
//! source_branch = "main"
//! ```

use crate::config_file::{load_config_file, read_config_file};
use crate::error::ConfigError;
use l10n_diff::AlignOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Environment variables consulted when no token is configured
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// A repository written as `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoSpec {
    pub owner: String,
    pub repo: String,
}

impl RepoSpec {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self::new(owner, repo))
            }
            _ => Err(ConfigError::InvalidRepository(s.to_string())),
        }
    }
}

impl TryFrom<String> for RepoSpec {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RepoSpec> for String {
    fn from(spec: RepoSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Where translations and sources live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySettings {
    /// Repository holding the translations
    pub translation: RepoSpec,
    /// Repository holding the English sources
    pub source: RepoSpec,
    /// Branch sources are read from
    pub source_branch: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            translation: RepoSpec::new("mdn", "translated-content"),
            source: RepoSpec::new("mdn", "content"),
            source_branch: "main".to_string(),
        }
    }
}

/// Preferences loaded from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// GitHub access token, see [`Preferences::resolve_token`]
    #[serde(default)]
    pub access_token: Option<String>,

    /// Companion backend base URL
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Locale reviewed by default
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Side-by-side comparison settings
    #[serde(default)]
    pub compare: AlignOptions,

    #[serde(default)]
    pub repositories: RepositorySettings,
}

fn default_backend_url() -> String {
    "http://localhost:3030".to_string()
}

fn default_locale() -> String {
    "zh-cn".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            access_token: None,
            backend_url: default_backend_url(),
            locale: default_locale(),
            compare: AlignOptions::default(),
            repositories: RepositorySettings::default(),
        }
    }
}

impl Preferences {
    /// Load from the first preference file found, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = load_config_file() {
            match Self::from_toml(&content) {
                Ok(preferences) => {
                    log::info!("Loaded preferences from {}", path.display());
                    return preferences;
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("Using default preferences");
        Self::default()
    }

    /// Load an explicitly given file; unlike [`Preferences::load`] failures are errors
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = read_config_file(path)?;
        let preferences = Self::from_toml(&content)?;
        log::info!("Loaded preferences from {}", path.display());
        Ok(preferences)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Token from the file, else from `GITHUB_TOKEN`, else `GH_TOKEN`
    pub fn resolve_token(&self) -> Option<String> {
        self.resolve_token_with(|name| std::env::var(name).ok())
    }

    /// [`Preferences::resolve_token`] with a custom environment lookup
    pub fn resolve_token_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |token: String| {
            let token = token.trim().to_string();
            (!token.is_empty()).then_some(token)
        };

        if let Some(token) = self.access_token.clone().and_then(non_blank) {
            log::debug!("Using access token from preferences");
            return Some(token);
        }

        TOKEN_ENV_VARS.iter().find_map(|name| {
            let token = lookup(name).and_then(non_blank);
            if token.is_some() {
                log::debug!("Using access token from {}", name);
            }
            token
        })
    }
}
