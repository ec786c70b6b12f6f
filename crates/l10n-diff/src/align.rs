//! Positional alignment of localized and source units.

use crate::model::{AlignOptions, AlignedPair, SplitMethod};
use crate::segment::segment;

/// Align two contents unit by unit.
///
/// Units are paired by index; the shorter side is padded with absent
/// positions. With [`SplitMethod::Double`] a spacer follows each row except
/// the last, unless that row and the next both hold a list item or
/// blockquote unit on either side, so consecutive Markdown units read as one
/// block.
pub fn align(localized: &str, source: &str, options: &AlignOptions) -> Vec<AlignedPair> {
    let left = segment(localized, options);
    let right = segment(source, options);
    align_units(left, right, options.split_method)
}

/// Align already segmented units.
pub fn align_units(
    left: Vec<String>,
    right: Vec<String>,
    split_method: SplitMethod,
) -> Vec<AlignedPair> {
    let len = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();

    let mut rows: Vec<AlignedPair> = (0..len)
        .map(|_| AlignedPair {
            left: left.next(),
            right: right.next(),
            spacer_after: false,
        })
        .collect();

    if split_method == SplitMethod::Double {
        let markdown: Vec<bool> = rows.iter().map(AlignedPair::is_markdown_continuation).collect();
        for (index, row) in rows.iter_mut().enumerate().take(len.saturating_sub(1)) {
            row.spacer_after = !(markdown[index] && markdown[index + 1]);
        }
    }

    rows
}
