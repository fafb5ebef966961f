//! Convert command report data structures.

use recase_core::CaseStyle;

use super::output::{Output, Report};

/// Converted inputs, one output line per kept input.
#[derive(Debug)]
pub struct ConvertReport {
    /// Converted lines, in input order.
    pub lines: Vec<String>,
    /// Number of inputs dropped because they converted to nothing.
    pub skipped: usize,
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        for line in &self.lines {
            out.preformatted(line);
        }
    }
}

/// An input that is not already in the target style.
#[derive(Debug, PartialEq, Eq)]
pub struct Unformatted {
    pub input: String,
    pub expected: String,
}

/// Result of checking inputs against a style without converting them.
#[derive(Debug)]
pub struct FormatCheckReport {
    pub style: CaseStyle,
    pub unformatted: Vec<Unformatted>,
}

impl FormatCheckReport {
    /// Whether every input is already in the style.
    pub fn is_formatted(&self) -> bool {
        self.unformatted.is_empty()
    }
}

impl Report for FormatCheckReport {
    fn render(&self, out: &mut dyn Output) {
        for item in &self.unformatted {
            out.warning(&format!(
                "'{}' is not {} case (expected '{}')",
                item.input, self.style, item.expected
            ));
        }
    }
}
