//! Conversion options.

use serde::{Deserialize, Serialize};

/// How heading structure maps onto outline indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeadingLayout {
    /// Keep an open-heading hierarchy: every node is indented under its
    /// enclosing headings, and deeper headings indent one unit per open
    /// ancestor.
    #[default]
    Nested,
    /// Render every heading, paragraph and top-level list item at the
    /// outline root. List nesting still indents relative to its own list.
    Flat,
}

impl std::fmt::Display for HeadingLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingLayout::Nested => write!(f, "nested"),
            HeadingLayout::Flat => write!(f, "flat"),
        }
    }
}

/// Options for one conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Heading indentation rule.
    pub heading_layout: HeadingLayout,
}

impl ConvertOptions {
    /// Create options with the given heading layout.
    pub fn new(heading_layout: HeadingLayout) -> Self {
        Self { heading_layout }
    }
}
