//! Styles command report data structures.

use recase_core::CaseStyle;

use super::output::{Output, Report};

/// A style together with a sample rendered in it.
#[derive(Debug)]
pub struct StyleSample {
    pub style: CaseStyle,
    pub rendered: String,
}

/// Every available style, rendered on the same sample.
#[derive(Debug)]
pub struct StylesReport {
    pub samples: Vec<StyleSample>,
}

impl Report for StylesReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Styles");
        for sample in &self.samples {
            out.key_value_indented(sample.style.as_str(), &sample.rendered);
        }
    }
}
