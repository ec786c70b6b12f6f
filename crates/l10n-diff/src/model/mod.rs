//! Data models for alignment.

mod options;
mod row;

pub use options::{AlignOptions, ParseSplitMethodError, SplitMethod};
pub use row::AlignedPair;
pub(crate) use row::is_markdown_unit;
