use crate::error::ConfigError;
use crate::paths::candidate_paths;
use std::path::{Path, PathBuf};

/// Load preference file content from the first candidate that exists
///
/// Searches, in order:
/// 1. `.l10n-review.toml` in the current working directory
/// 2. `.l10n-review.toml` in the home directory
/// 3. `l10n-review/config.toml` in the platform config directory
///
/// Returns the path and content if found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    first_readable(candidate_paths())
}

fn first_readable(candidates: impl IntoIterator<Item = PathBuf>) -> Option<(PathBuf, String)> {
    for path in candidates {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded preferences from {}", path.display());
            return Some((path, content));
        }
    }
    None
}

/// Read an explicitly requested preference file
pub fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}
