mod check;
mod completions;
mod convert;
mod styles;
mod words;

use std::{io, path::Path};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::Result;
use recase_config::{Config, DEFAULT_FILENAME, RecaseToml};
use styles::StylesCommand;
use words::WordsCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for recase_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the config from an explicit path, or from ./recase.toml when present.
///
/// An explicit path must exist; the default one is optional.
pub(crate) fn load_config(explicit: Option<&Path>) -> Config {
    match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            RecaseToml::open(path).unwrap_or_exit().config().clone()
        }
        None => RecaseToml::open_if_exists(DEFAULT_FILENAME)
            .unwrap_or_exit()
            .map(|file| file.config().clone())
            .unwrap_or_default(),
    }
}

/// Positional inputs if any were given, otherwise every line of stdin.
pub(crate) fn read_inputs(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        tracing::debug!(count = args.len(), "reading inputs from arguments");
        return Ok(args.to_vec());
    }

    tracing::debug!("reading inputs from stdin");
    let lines = io::stdin().lines().collect::<io::Result<Vec<_>>>()?;
    Ok(lines)
}

#[derive(Parser)]
#[command(name = "recase")]
#[command(version)]
#[command(about = "Convert text between camelCase, kebab-case and dot.case")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert(cmd) => cmd.run(),
            Commands::Words(cmd) => cmd.run(),
            Commands::Styles(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert inputs to a case style
    Convert(ConvertCommand),

    /// Show the normalized words of each input
    Words(WordsCommand),

    /// List the available case styles
    Styles(StylesCommand),

    /// Validate recase.toml
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_read_inputs_prefers_arguments() {
        let args = vec!["fooBar".to_string(), "baz qux".to_string()];
        assert_eq!(read_inputs(&args).unwrap(), args);
    }
}
