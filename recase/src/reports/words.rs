//! Words command report data structures.

use recase_core::Words;

use super::output::{Output, Report};

/// Normalized words for each input.
#[derive(Debug)]
pub struct WordsReport {
    pub words: Vec<Words>,
}

impl Report for WordsReport {
    fn render(&self, out: &mut dyn Output) {
        for words in &self.words {
            out.preformatted(&words.join(" "));
        }
    }
}
