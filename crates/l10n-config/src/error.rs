use std::path::PathBuf;
use thiserror::Error;

/// Errors loading preferences
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid repository '{0}', expected 'owner/repo'")]
    InvalidRepository(String),
}
