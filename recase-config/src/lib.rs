//! `recase.toml` parsing and validation.
//!
//! ```toml
//! [convert]
//! style = "kebab"
//! skip_empty = false
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;

use std::str::FromStr;

pub use error::{Error, Result, SourceContext};
pub use file::RecaseToml;
use recase_core::CaseStyle;
use serde::Deserialize;

/// Default file name looked up in the working directory.
pub const DEFAULT_FILENAME: &str = "recase.toml";

/// Parsed and validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub convert: ConvertConfig,
}

/// Settings for the `convert` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Style used when none is given on the command line
    pub style: CaseStyle,
    /// Drop inputs that convert to an empty string
    pub skip_empty: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    convert: RawConvertConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConvertConfig {
    style: Option<toml::Spanned<String>>,
    #[serde(default)]
    skip_empty: bool,
}

impl Config {
    /// Parse from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

        let style = match raw.convert.style {
            Some(spanned) => spanned
                .get_ref()
                .parse::<CaseStyle>()
                .map_err(|e| ctx.unknown_style_error(e.name, spanned.span()))?,
            None => CaseStyle::default(),
        };

        Ok(Self {
            convert: ConvertConfig {
                style,
                skip_empty: raw.convert.skip_empty,
            },
        })
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    /// Parse using [`DEFAULT_FILENAME`] for error reporting
    fn from_str(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, DEFAULT_FILENAME)
    }
}
