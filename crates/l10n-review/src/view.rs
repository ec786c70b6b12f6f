//! Plain-text side-by-side rendering
//!
//! Column widths are measured in terminal cells, so CJK text (two cells
//! per character) lines up with Latin text.

use l10n_client::{ChangeEntry, ChangedFile, Entry, Label, PrSummary};
use l10n_diff::AlignedPair;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_SEPARATOR: &str = " │ ";
const MIN_COLUMN_WIDTH: usize = 10;
const TAB_WIDTH: usize = 4;

/// Width of one column for a total output width
pub fn column_width(total_width: usize) -> usize {
    (total_width.saturating_sub(COLUMN_SEPARATOR.width()) / 2).max(MIN_COLUMN_WIDTH)
}

/// Hard-wrap `text` to `width` cells; every input line yields at least one line
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let raw = raw.trim_end_matches('\r').replace('\t', &" ".repeat(TAB_WIDTH));
        let mut current = String::new();
        let mut current_width = 0;

        for ch in raw.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
        lines.push(current);
    }

    lines
}

/// Pad `text` with spaces to `width` cells
fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// Lay out two blocks of lines next to each other
fn side_by_side(left: &[String], right: &[String], width: usize, out: &mut String) {
    let height = left.len().max(right.len());
    for i in 0..height {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        let line = format!("{}{}{}", pad(l, width), COLUMN_SEPARATOR, r);
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

/// Render aligned rows; a spacer becomes an empty line, absent cells stay blank
pub fn render_rows(rows: &[AlignedPair], total_width: usize) -> String {
    let width = column_width(total_width);
    let mut out = String::new();

    for row in rows {
        let left = wrap(row.left_text(), width);
        let right = wrap(row.right_text(), width);
        side_by_side(&left, &right, width, &mut out);
        if row.spacer_after {
            out.push('\n');
        }
    }

    out
}

fn metadata_lines(heading: String, entry: &Entry, commit_label: &str, width: usize) -> Vec<String> {
    let fields = [
        ("Title", entry.title.as_str()),
        ("Slug", entry.slug.as_str()),
        (commit_label, entry.source_commit.as_deref().unwrap_or("")),
    ];

    let mut lines = vec![heading, String::new()];
    for (label, value) in fields {
        lines.extend(wrap(&format!("{}: {}", label, value), width));
    }
    lines
}

/// Render the metadata panels of both entries
pub fn render_metadata(
    localized: &Entry,
    source: &Entry,
    locale: &str,
    source_link: Option<&str>,
    total_width: usize,
) -> String {
    let width = column_width(total_width);

    let left = metadata_lines(format!("Localized ({})", locale), localized, "Source commit", width);
    let mut right = metadata_lines("Source".to_string(), source, "Current commit", width);
    if let Some(link) = source_link {
        right.extend(wrap(&format!("Link: {}", link), width));
    }

    let mut out = String::new();
    side_by_side(&left, &right, width, &mut out);
    out
}

/// Full comparison view: metadata panels, a rule, then the aligned rows
pub fn render_comparison(
    localized: &Entry,
    source: &Entry,
    locale: &str,
    source_link: Option<&str>,
    rows: &[AlignedPair],
    total_width: usize,
) -> String {
    let mut out = render_metadata(localized, source, locale, source_link, total_width);
    out.push_str(&"─".repeat(total_width.max(2 * MIN_COLUMN_WIDTH)));
    out.push('\n');
    out.push_str(&render_rows(rows, total_width));
    out
}

pub fn render_changed_files(files: &[&ChangedFile]) -> String {
    let status_width = files.iter().map(|f| f.status.width()).max().unwrap_or(0);
    files
        .iter()
        .map(|f| format!("{}  {}\n", pad(&f.status, status_width), f.path))
        .collect()
}

pub fn render_search_results(results: &[PrSummary]) -> String {
    let mut out = String::new();
    for pr in results {
        out.push_str(&format!("#{:<6} {}\n", pr.number, pr.title));
        let mut details = format!(
            "        by {} · updated {}",
            if pr.author.is_empty() { "unknown" } else { &pr.author },
            pr.updated_at.format("%Y-%m-%d %H:%M")
        );
        if !pr.labels.is_empty() {
            details.push_str(&format!(" · {}", pr.labels.join(", ")));
        }
        out.push_str(&details);
        out.push('\n');
    }
    out
}

pub fn render_labels(labels: &[Label]) -> String {
    let name_width = labels.iter().map(|l| l.name.width()).max().unwrap_or(0);
    labels
        .iter()
        .map(|l| format!("{}  #{}\n", pad(&l.name, name_width), l.color))
        .collect()
}

pub fn render_changes(changes: &[ChangeEntry]) -> String {
    let status_width = changes.iter().map(|c| c.status.width()).max().unwrap_or(0);
    let flag = |exists: bool| if exists { "yes" } else { "no" };
    changes
        .iter()
        .map(|c| {
            format!(
                "{}  {}  (source: {}, translation: {})\n",
                pad(&c.status, status_width),
                c.path,
                flag(c.source_exists),
                flag(c.translation_exists)
            )
        })
        .collect()
}
