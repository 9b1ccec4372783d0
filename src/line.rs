//! Line classification.
//!
//! Every input line is exactly one of heading, list item, paragraph or
//! blank, decided by a prefix pattern. Classification looks at the line
//! alone; nesting context lives in the converter's stacks.

use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(?:-|\*|[0-9]+\.)\s+(.*)$").unwrap());

/// One classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`-prefixed heading; `level` is the number of `#` characters.
    Heading { level: usize, content: &'a str },
    /// Bulleted or ordered list item; `indent` is the source column of the
    /// marker. Ordered markers are structurally identical to unordered
    /// ones, the numeric value is discarded.
    ListItem { indent: usize, content: &'a str },
    /// Any other non-blank line, taken as a standalone node.
    Paragraph { content: &'a str },
    /// Whitespace-only line. Dropped from the output, leaves stacks alone.
    Blank,
}

/// Classify a raw input line. Headings are matched against the trimmed
/// line, list items against the raw line so the indent column survives.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(caps) = HEADING.captures(trimmed) {
        let (_, [hashes, content]) = caps.extract();
        return LineKind::Heading {
            level: hashes.len(),
            content,
        };
    }
    if let Some(caps) = LIST_ITEM.captures(line) {
        let (_, [indent, content]) = caps.extract();
        return LineKind::ListItem {
            indent: indent.len(),
            content,
        };
    }
    LineKind::Paragraph { content: trimmed }
}
