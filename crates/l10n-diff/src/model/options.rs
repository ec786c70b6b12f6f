//! Alignment settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How content is cut into units before alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    /// One unit per line.
    Single,
    /// One unit per paragraph (blank-line separated).
    #[default]
    Double,
}

impl SplitMethod {
    /// Separator the content is split on.
    pub fn separator(&self) -> &'static str {
        match self {
            SplitMethod::Single => "\n",
            SplitMethod::Double => "\n\n",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMethod::Single => "single",
            SplitMethod::Double => "double",
        }
    }
}

impl fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised split method name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown split method '{0}', expected 'single' or 'double'")]
pub struct ParseSplitMethodError(pub String);

impl FromStr for SplitMethod {
    type Err = ParseSplitMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(SplitMethod::Single),
            "double" => Ok(SplitMethod::Double),
            _ => Err(ParseSplitMethodError(s.to_string())),
        }
    }
}

/// Options controlling segmentation and spacer placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignOptions {
    pub split_method: SplitMethod,
    /// Split blocks into one unit per `- ` list item.
    pub markdown_lists: bool,
    /// Split blockquotes on their empty `>` lines. Only honoured together
    /// with `markdown_lists`.
    pub markdown_blockquotes: bool,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            split_method: SplitMethod::Double,
            markdown_lists: true,
            markdown_blockquotes: true,
        }
    }
}

impl AlignOptions {
    /// Plain splitting with all Markdown handling off.
    pub fn plain(split_method: SplitMethod) -> Self {
        Self {
            split_method,
            markdown_lists: false,
            markdown_blockquotes: false,
        }
    }
}
