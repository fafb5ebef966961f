use clap::Args;
use eyre::Result;

use super::read_inputs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct WordsCommand {
    /// Inputs to normalize (reads stdin lines when empty)
    pub inputs: Vec<String>,

    /// Print a JSON array of word lists instead of one line per input
    #[arg(long)]
    pub json: bool,
}

impl WordsCommand {
    pub fn run(&self) -> Result<()> {
        let inputs = read_inputs(&self.inputs)?;
        let report = ops::words(&inputs);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.words)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
