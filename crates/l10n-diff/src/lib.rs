//! # l10n-diff
//!
//! Side-by-side alignment of a translated document and its source.
//!
//! ## Design Principles
//!
//! This crate is pure: it receives two texts and returns rows. It performs
//! no I/O and never fails, so any front end (terminal, JSON, web) can
//! render the same rows.
//!
//! Alignment is positional. Both texts are cut into units (lines or
//! paragraphs, optionally refined along Markdown list items and
//! blockquotes) and unit `i` of one side is shown next to unit `i` of the
//! other. A translation that keeps the paragraph structure of its source
//! therefore lines up paragraph by paragraph.
//!
//! ## Usage
//!
//! ```rust
//! use l10n_diff::{align, AlignOptions, SplitMethod};
//!
//! let options = AlignOptions::plain(SplitMethod::Double);
//! let rows = align("第一段\n\n第二段", "First\n\nSecond\n\nThird", &options);
//!
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[2].left, None);
//! assert!(rows[0].spacer_after);
//! ```

pub mod align;
pub mod model;
pub mod segment;

pub use align::{align, align_units};
pub use model::{AlignOptions, AlignedPair, ParseSplitMethodError, SplitMethod};
pub use segment::segment;
