use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use recase_config::RecaseToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to recase.toml (defaults to ./recase.toml)
    #[arg(short, long, default_value = "recase.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let recase_toml = RecaseToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&recase_toml);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
