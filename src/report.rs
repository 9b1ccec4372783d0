//! Conversion report types.

use serde::{Deserialize, Serialize};

/// Type of warning raised during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A list item whose indentation matches no open nesting level
    /// cleanly. The item is kept at the current depth.
    IrregularIndentation,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningKind::IrregularIndentation => write!(f, "irregular_indentation"),
        }
    }
}

/// A warning generated during conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertWarning {
    /// Line number (1-indexed).
    pub line: usize,
    /// Type of warning.
    pub kind: WarningKind,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for ConvertWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Statistics about one conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Total lines in the input.
    pub total_lines: usize,
    /// Heading lines converted.
    pub headings: usize,
    /// List item lines converted.
    pub list_items: usize,
    /// Paragraph lines converted.
    pub paragraphs: usize,
    /// Blank lines skipped.
    pub blank_lines: usize,
}

impl ConversionStatistics {
    /// Number of input lines that produced an output node.
    pub fn converted_lines(&self) -> usize {
        self.headings + self.list_items + self.paragraphs
    }
}

/// Complete conversion report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Conversion statistics.
    pub statistics: ConversionStatistics,
    /// All warnings generated.
    pub warnings: Vec<ConvertWarning>,
    /// Duration in milliseconds.
    pub duration_ms: u64,
}

impl ConversionReport {
    /// Add a warning to the report.
    pub fn add_warning(&mut self, warning: ConvertWarning) {
        self.warnings.push(warning);
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to human-readable text format.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Tana Paste Conversion Report\n");
        output.push_str("============================\n");
        output.push_str(&format!("Time:   {}ms\n\n", self.duration_ms));

        output.push_str("Statistics\n");
        output.push_str("----------\n");
        output.push_str(&format!("Total lines:  {}\n", self.statistics.total_lines));
        output.push_str(&format!(
            "Converted:    {}\n",
            self.statistics.converted_lines()
        ));
        output.push_str(&format!("Headings:     {}\n", self.statistics.headings));
        output.push_str(&format!("List items:   {}\n", self.statistics.list_items));
        output.push_str(&format!("Paragraphs:   {}\n", self.statistics.paragraphs));
        output.push_str(&format!("Blank lines:  {}\n\n", self.statistics.blank_lines));

        if !self.warnings.is_empty() {
            output.push_str("Warnings\n");
            output.push_str("--------\n");
            for warning in &self.warnings {
                output.push_str(&format!("⚠ {}\n", warning));
            }
            output.push('\n');
        }

        output.push_str("Result\n");
        output.push_str("------\n");
        if self.warnings.is_empty() {
            output.push_str("✓ Conversion completed successfully\n");
        } else {
            output.push_str("✓ Conversion completed with warnings\n");
        }

        output
    }
}
