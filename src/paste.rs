//! Tana Paste output primitives.
//!
//! Tana Paste is a plain-text outline: a `%%tana%%` marker line followed by
//! dash-bullet nodes nested with two-space indentation. Headings carry a
//! `!!` prefix on their node.

/// Marker line telling Tana that the clipboard holds paste-format input.
pub const PASTE_HEADER: &str = "%%tana%%";

/// One level of outline nesting in the output.
pub const INDENT_UNIT: &str = "  ";

/// Source columns that make up one list nesting level.
pub const COLUMNS_PER_INDENT: usize = 2;

/// Render a plain node at the given nesting depth.
pub fn node(indent_units: usize, content: &str) -> String {
    format!("{}- {}", INDENT_UNIT.repeat(indent_units), content)
}

/// Render a heading node at the given nesting depth.
pub fn heading_node(indent_units: usize, content: &str) -> String {
    format!("{}- !! {}", INDENT_UNIT.repeat(indent_units), content)
}

/// Join rendered nodes under the paste header. No trailing newline is
/// appended after the last node; an empty document is the header alone.
pub fn assemble(lines: &[String]) -> String {
    format!("{}\n{}", PASTE_HEADER, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_rendering() {
        assert_eq!(node(0, "Hello"), "- Hello");
        assert_eq!(node(2, "deep"), "    - deep");
        assert_eq!(heading_node(1, "Title"), "  - !! Title");
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(assemble(&[]), "%%tana%%\n");
    }

    #[test]
    fn test_assemble_no_trailing_newline() {
        let lines = vec![node(0, "a"), node(1, "b")];
        assert_eq!(assemble(&lines), "%%tana%%\n- a\n  - b");
    }
}
