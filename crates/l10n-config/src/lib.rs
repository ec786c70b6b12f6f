//! Preferences and file locations for l10n-review
//!
//! This crate provides:
//! - Preference file paths
//! - Preference file loading (TOML)
//! - Review preferences (Preferences) and GitHub token resolution

pub mod config_file;
pub mod error;
pub mod paths;
pub mod preferences;

pub use config_file::{load_config_file, read_config_file};
pub use error::ConfigError;
pub use preferences::{Preferences, RepoSpec, RepositorySettings, TOKEN_ENV_VARS};
