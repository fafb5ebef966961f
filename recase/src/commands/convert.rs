use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use recase_core::CaseStyle;

use super::{load_config, read_inputs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Inputs to convert (reads stdin lines when empty)
    pub inputs: Vec<String>,

    /// Target style: camel, kebab or dot (defaults to recase.toml, then kebab)
    #[arg(short, long)]
    pub style: Option<CaseStyle>,

    /// Path to recase.toml (defaults to ./recase.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Check that inputs are already in the style without printing them (exit 1 if not)
    #[arg(long)]
    pub check: bool,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.config.as_deref());
        let style = self.style.unwrap_or(config.convert.style);
        tracing::debug!(%style, check = self.check, "converting");

        let inputs = read_inputs(&self.inputs)?;

        if self.check {
            let report = ops::check_formatted(&inputs, style);
            report.render(&mut TerminalOutput::new());
            if !report.is_formatted() {
                std::process::exit(1);
            }
            return Ok(());
        }

        let report = ops::convert(&inputs, style, config.convert.skip_empty);
        tracing::debug!(skipped = report.skipped, "converted");
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
