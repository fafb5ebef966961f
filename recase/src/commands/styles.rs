use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct StylesCommand {
    /// Sample text rendered in every style
    #[arg(long, default_value = "hello world example")]
    pub sample: String,
}

impl StylesCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::styles(&self.sample);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
