//! Markdown to Tana Paste conversion.
//!
//! The conversion is a single pass over the input lines. Two stacks carry
//! the structural state across lines: the open heading levels and the
//! source columns of the open list nesting levels. Each non-blank line
//! renders exactly one output node; blank lines are dropped and leave both
//! stacks alone. Inline emphasis is re-marked per line.

use std::time::Instant;

use thiserror::Error;

use crate::inline;
use crate::line::{self, LineKind};
use crate::options::{ConvertOptions, HeadingLayout};
use crate::paste::{self, COLUMNS_PER_INDENT};
use crate::report::{ConversionReport, ConvertWarning, WarningKind};

/// The input held no convertible text. Raised at the host boundary; the
/// conversion itself accepts any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input text is empty or blank")]
pub struct EmptyInputError;

/// Result of one conversion.
#[derive(Debug)]
pub struct ConvertResult {
    /// The rendered Tana Paste text.
    pub tana_paste: String,
    /// What happened along the way.
    pub report: ConversionReport,
}

/// Markdown to Tana Paste converter.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConvertOptions,
}

impl MarkdownConverter {
    /// Create a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert one Markdown document. Total over all inputs: malformed or
    /// unrecognized constructs degrade to paragraph nodes or literal text,
    /// never to an error.
    pub fn convert(&self, markdown: &str) -> ConvertResult {
        let start = Instant::now();
        let mut report = ConversionReport::default();
        let mut heading_stack: Vec<usize> = Vec::new();
        let mut list_stack: Vec<usize> = Vec::new();
        let mut output: Vec<String> = Vec::new();

        for (row, raw) in markdown.split('\n').enumerate() {
            report.statistics.total_lines += 1;
            let base_units = match self.options.heading_layout {
                HeadingLayout::Nested => heading_stack.len(),
                HeadingLayout::Flat => 0,
            };
            match line::classify(raw) {
                LineKind::Blank => {
                    report.statistics.blank_lines += 1;
                }
                LineKind::Heading { level, content } => {
                    report.statistics.headings += 1;
                    // The heading's own indent counts the ancestors it
                    // keeps, against the stack as it stood before this
                    // heading reshapes it.
                    let units = match self.options.heading_layout {
                        HeadingLayout::Nested => heading_stack
                            .iter()
                            .take_while(|&&open| open < level)
                            .count(),
                        HeadingLayout::Flat => 0,
                    };
                    while heading_stack.last().is_some_and(|&open| level <= open) {
                        heading_stack.pop();
                    }
                    heading_stack.push(level);
                    list_stack.clear();
                    output.push(paste::heading_node(units, &inline::rewrite(content)));
                }
                LineKind::ListItem { indent, content } => {
                    report.statistics.list_items += 1;
                    let depth = resolve_list_depth(&mut list_stack, indent, row + 1, &mut report);
                    let units = base_units + depth.saturating_sub(1);
                    output.push(paste::node(units, &inline::rewrite(content)));
                }
                LineKind::Paragraph { content } => {
                    report.statistics.paragraphs += 1;
                    list_stack.clear();
                    output.push(paste::node(base_units, &inline::rewrite(content)));
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        ConvertResult {
            tana_paste: paste::assemble(&output),
            report,
        }
    }

    /// Host-boundary entry point: reject empty or whitespace-only input
    /// before converting, so callers can surface the precondition failure
    /// without ever invoking the transform.
    pub fn convert_nonblank(&self, markdown: &str) -> Result<ConvertResult, EmptyInputError> {
        if markdown.trim().is_empty() {
            return Err(EmptyInputError);
        }
        Ok(self.convert(markdown))
    }
}

/// Convert a Markdown string to Tana Paste with default options. The
/// output starts with the `%%tana%%` marker line; blank input yields the
/// marker alone.
pub fn markdown_to_tana_paste(markdown: &str) -> String {
    MarkdownConverter::default().convert(markdown).tana_paste
}

/// Resolve a list item's nesting depth against the open-level stack.
///
/// Levels deeper than the item's column are closed first. The remaining
/// top either already matches the column (same level), or a sufficiently
/// deeper column opens a new level: one indent unit beyond the top, or any
/// deeper column when the top sits at column zero. A column that lands
/// between open levels matches no rule cleanly; the stack is kept as-is
/// and the item joins the current deepest level.
fn resolve_list_depth(
    stack: &mut Vec<usize>,
    column: usize,
    line_no: usize,
    report: &mut ConversionReport,
) -> usize {
    while stack.last().is_some_and(|&open| column < open) {
        stack.pop();
    }
    match stack.last().copied() {
        None => stack.push(column),
        Some(top) => {
            let threshold = if top == 0 { 0 } else { top + COLUMNS_PER_INDENT };
            if column != top && column >= threshold {
                stack.push(column);
            } else if column != top {
                log::debug!(
                    "line {line_no}: list indent {column} sits between open levels, keeping depth {}",
                    stack.len()
                );
                report.add_warning(ConvertWarning {
                    line: line_no,
                    kind: WarningKind::IrregularIndentation,
                    message: format!(
                        "list indent of {column} columns does not match an open level; kept at depth {}",
                        stack.len()
                    ),
                });
            }
        }
    }
    stack.len()
}
