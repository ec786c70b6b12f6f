//! Front matter extraction
//!
//! Entries start with a YAML block fenced by `---` lines. The fence match
//! is loose: the block ends at the first `---` that follows at
//! least one character, wherever it sits.

use serde::Deserialize;

const FENCE: &str = "---";

/// Metadata keys this tool cares about; everything else is ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub l10n: Option<L10nMeta>,
}

/// The nested `l10n:` block of a translated entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct L10nMeta {
    #[serde(rename = "sourceCommit")]
    pub source_commit: Option<String>,
}

impl FrontMatter {
    /// Parse a YAML block
    pub fn parse(block: &str) -> Result<Self, serde_yaml::Error> {
        // An all-whitespace block is valid YAML for "nothing"
        if block.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(block)
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn slug(&self) -> Option<&str> {
        non_empty(self.slug.as_deref())
    }

    pub fn source_commit(&self) -> Option<&str> {
        non_empty(self.l10n.as_ref().and_then(|l| l.source_commit.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Split a document into its front matter block and trimmed body.
///
/// Returns `None` when the document does not open with a fence.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(FENCE)?;
    // the block must hold at least one character
    let min_len = rest.chars().next()?.len_utf8();
    let end = rest[min_len..].find(FENCE)? + min_len;

    let block = &rest[..end];
    let body = rest[end + FENCE.len()..].trim();
    Some((block, body))
}

/// Best-effort metadata and body, for sources that are not validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientDocument {
    pub front_matter: FrontMatter,
    pub body: String,
}

/// Parse a document without failing.
///
/// A missing or malformed front matter block yields empty metadata. When
/// there is no fenced block at all the body is the untouched text.
pub fn parse_lenient(text: &str) -> LenientDocument {
    match split_front_matter(text) {
        Some((block, body)) => {
            let front_matter = FrontMatter::parse(block).unwrap_or_else(|e| {
                log::warn!("Failed to parse YAML metadata: {}", e);
                FrontMatter::default()
            });
            LenientDocument {
                front_matter,
                body: body.to_string(),
            }
        }
        None => LenientDocument {
            front_matter: FrontMatter::default(),
            body: text.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "---\ntitle: Fetch API\nslug: Web/API/Fetch_API\nl10n:\n  sourceCommit: abc123\n---\n\n# Heading\n\nBody text.\n";

    #[test]
    fn test_split_front_matter() {
        let (block, body) = split_front_matter(DOC).unwrap();
        assert!(block.contains("title: Fetch API"));
        assert_eq!(body, "# Heading\n\nBody text.");
    }

    #[test]
    fn test_split_requires_leading_fence() {
        assert_eq!(split_front_matter("title: x\n---\nbody"), None);
        assert_eq!(split_front_matter(" ---\ntitle: x\n---\n"), None);
    }

    #[test]
    fn test_split_requires_closing_fence() {
        assert_eq!(split_front_matter("---\ntitle: x\n"), None);
        assert_eq!(split_front_matter("---"), None);
        assert_eq!(split_front_matter("----"), None);
    }

    #[test]
    fn test_split_shortest_block() {
        // a one-character block followed by the closing fence
        assert_eq!(split_front_matter("-------"), Some(("-", "")));
        assert_eq!(split_front_matter("----- rest"), None);
        assert_eq!(split_front_matter("---a---b---"), Some(("a", "b---")));
    }

    #[test]
    fn test_split_multibyte_block() {
        assert_eq!(split_front_matter("---标---正文"), Some(("标", "正文")));
    }

    #[test]
    fn test_parse_front_matter() {
        let (block, _) = split_front_matter(DOC).unwrap();
        let fm = FrontMatter::parse(block).unwrap();
        assert_eq!(fm.title(), Some("Fetch API"));
        assert_eq!(fm.slug(), Some("Web/API/Fetch_API"));
        assert_eq!(fm.source_commit(), Some("abc123"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let fm = FrontMatter::parse("title: A\nslug: b\npage-type: guide\nbrowser-compat: x.y\n")
            .unwrap();
        assert_eq!(fm.title(), Some("A"));
        assert_eq!(fm.source_commit(), None);
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let fm = FrontMatter::parse("title: ''\nslug: b\n").unwrap();
        assert_eq!(fm.title(), None);
        assert_eq!(fm.slug(), Some("b"));
    }

    #[test]
    fn test_parse_lenient_without_front_matter() {
        let doc = parse_lenient("  plain body  ");
        assert_eq!(doc.front_matter, FrontMatter::default());
        assert_eq!(doc.body, "  plain body  ");
    }

    #[test]
    fn test_parse_lenient_with_broken_yaml() {
        let doc = parse_lenient("---\ntitle: [unclosed\n---\nbody\n");
        assert_eq!(doc.front_matter, FrontMatter::default());
        assert_eq!(doc.body, "body");
    }
}
