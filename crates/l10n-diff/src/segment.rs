//! Cutting entry content into alignable units.

use crate::model::AlignOptions;
use regex::Regex;
use std::sync::OnceLock;

/// Unit inserted between blockquote fragments.
pub const BLOCKQUOTE_MARKER: &str = ">";

/// Split `content` into units.
///
/// Content is first split on the separator of the split method. With
/// Markdown list handling on, each block is then split further: a
/// blockquote block (when blockquote handling is on too) at its empty `>`
/// lines, any other block before every `- ` list item.
pub fn segment(content: &str, options: &AlignOptions) -> Vec<String> {
    let blocks = content.split(options.split_method.separator());

    if !options.markdown_lists {
        return blocks.map(str::to_string).collect();
    }

    blocks
        .flat_map(|block| {
            if options.markdown_blockquotes && block.trim_start().starts_with('>') {
                split_blockquote(block)
            } else {
                split_list_items(block)
            }
        })
        .collect()
}

/// Split a blockquote on lines holding only `>`, keeping a marker unit
/// between the fragments.
fn split_blockquote(block: &str) -> Vec<String> {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();

    let re = SEPARATOR.get_or_init(|| {
        // newline, a lone `>` surrounded by optional whitespace, newline
        Regex::new(r"\n\s*>\s*\n").unwrap()
    });

    let mut units = Vec::new();
    for (index, fragment) in re.split(block).enumerate() {
        if index > 0 {
            units.push(BLOCKQUOTE_MARKER.to_string());
        }
        units.push(fragment.to_string());
    }
    units
}

/// Split before every line that starts a `- ` list item. The newline is
/// dropped; whitespace (blank lines included) between it and the marker
/// stays with the item.
fn split_list_items(block: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut start = 0;

    for (index, _) in block.match_indices('\n') {
        let rest = &block[index + 1..];
        if rest.trim_start().starts_with("- ") {
            units.push(block[start..index].to_string());
            start = index + 1;
        }
    }
    units.push(block[start..].to_string());
    units
}
