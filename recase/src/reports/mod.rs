//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod convert;
mod output;
mod styles;
mod words;

pub use check::CheckReport;
pub use convert::{ConvertReport, FormatCheckReport, Unformatted};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use styles::{StyleSample, StylesReport};
pub use words::WordsReport;
