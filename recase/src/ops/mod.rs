//! Command operations.
//!
//! Each operation collects its data into a report without printing
//! anything, so commands only decide where the report is rendered.

use recase_config::RecaseToml;
use recase_core::{CaseStyle, normalize_words};

use crate::reports::{
    CheckReport, ConvertReport, FormatCheckReport, StyleSample, StylesReport, Unformatted,
    WordsReport,
};

/// Convert every input to `style`, optionally dropping empty results.
pub fn convert(inputs: &[String], style: CaseStyle, skip_empty: bool) -> ConvertReport {
    let mut lines = Vec::with_capacity(inputs.len());
    let mut skipped = 0;

    for input in inputs {
        let converted = style.apply(input);
        if skip_empty && converted.is_empty() {
            skipped += 1;
            continue;
        }
        lines.push(converted);
    }

    ConvertReport { lines, skipped }
}

/// Collect the inputs that are not already in `style`.
pub fn check_formatted(inputs: &[String], style: CaseStyle) -> FormatCheckReport {
    let unformatted = inputs
        .iter()
        .filter(|input| !style.is_formatted(input))
        .map(|input| Unformatted {
            input: input.clone(),
            expected: style.apply(input),
        })
        .collect();

    FormatCheckReport { style, unformatted }
}

/// Normalize every input into its word sequence.
pub fn words(inputs: &[String]) -> WordsReport {
    WordsReport {
        words: inputs.iter().map(normalize_words).collect(),
    }
}

/// Render `sample` in every available style.
pub fn styles(sample: &str) -> StylesReport {
    StylesReport {
        samples: CaseStyle::ALL
            .into_iter()
            .map(|style| StyleSample {
                style,
                rendered: style.apply(sample),
            })
            .collect(),
    }
}

/// Summarize a validated config file.
pub fn check(recase_toml: &RecaseToml) -> CheckReport {
    CheckReport {
        config_path: recase_toml.path().to_path_buf(),
        config: recase_toml.config().clone(),
    }
}
