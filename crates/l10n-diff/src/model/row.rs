//! Aligned output rows.

use serde::{Deserialize, Serialize};

/// One row of the side-by-side view.
///
/// `None` marks a position that does not exist on that side (the other
/// side has more units). `Some("")` is a present but empty unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Localized unit.
    pub left: Option<String>,
    /// Source unit.
    pub right: Option<String>,
    /// A visual separator follows this row.
    pub spacer_after: bool,
}

impl AlignedPair {
    /// Text of the localized side, blank when absent.
    pub fn left_text(&self) -> &str {
        self.left.as_deref().unwrap_or("")
    }

    /// Text of the source side, blank when absent.
    pub fn right_text(&self) -> &str {
        self.right.as_deref().unwrap_or("")
    }

    /// True when either side is a list item or a blockquote unit.
    pub fn is_markdown_continuation(&self) -> bool {
        is_markdown_unit(self.left_text()) || is_markdown_unit(self.right_text())
    }
}

pub(crate) fn is_list_item(unit: &str) -> bool {
    unit.trim().starts_with("- ")
}

pub(crate) fn is_blockquote(unit: &str) -> bool {
    unit.trim().starts_with('>')
}

pub(crate) fn is_markdown_unit(unit: &str) -> bool {
    is_list_item(unit) || is_blockquote(unit)
}
