//! Preference file locations
//!
//! Uses platform directories via `dirs` crate.
//!
//! Platform-specific locations of the application config file:
//! - Linux: `~/.config/l10n-review/config.toml`
//! - macOS: `~/Library/Application Support/l10n-review/config.toml`
//! - Windows: `%APPDATA%\l10n-review\config.toml`

use std::path::PathBuf;

const APP_NAME: &str = "l10n-review";

/// File name looked up in the working directory and the home directory
pub const LOCAL_CONFIG_FILE: &str = ".l10n-review.toml";

/// Preferences file in the current working directory
pub fn local_config_path() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// Preferences file in the home directory
pub fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(LOCAL_CONFIG_FILE))
}

/// Preferences file in the platform config directory
pub fn app_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join("config.toml"))
}

/// All candidate preference files, in lookup order
pub fn candidate_paths() -> Vec<PathBuf> {
    std::iter::once(local_config_path())
        .chain(home_config_path())
        .chain(app_config_path())
        .collect()
}
