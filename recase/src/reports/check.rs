//! Check command report data structures.

use std::path::PathBuf;

use recase_config::Config;

use super::output::{Output, Report};

/// Report data from config validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// The validated config.
    pub config: Config,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.section("convert");
        out.key_value_indented("style", self.config.convert.style.as_str());
        out.key_value_indented("skip_empty", &self.config.convert.skip_empty.to_string());
    }
}
