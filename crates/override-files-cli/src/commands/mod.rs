//! CLI commands.

pub mod dump_autoload;
pub mod list;
pub mod validate;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use override_files_plugin::Verbosity;
use std::path::PathBuf;

/// override-files - project file overrides for Composer vendor packages
///
/// Reads `extra.override_files` from composer.json and rewires the autoload
/// configuration so project copies replace the matching vendor files.
#[derive(Parser, Debug)]
#[command(name = "override-files")]
#[command(author = "override-files Contributors")]
#[command(version)]
#[command(about = "Override Composer vendor files with project copies", long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
#[command(styles = get_styles())]
pub struct Cli {
    /// Do not output any message
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable ANSI output (colors and formatting)
    #[arg(long, global = true)]
    pub no_ansi: bool,

    /// Use the specified directory as working directory
    #[arg(short = 'd', long = "working-dir", global = true, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Increase the verbosity of messages: -v for verbose, -vv for very verbose, -vvv for debug
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the command context.
    ///
    /// # Errors
    /// Returns error if the working directory cannot be resolved.
    pub fn context(&self) -> Result<Context> {
        let dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to read the current directory")?,
        };
        let root = dir
            .canonicalize()
            .with_context(|| format!("Invalid working directory: {}", dir.display()))?;
        Ok(Context {
            root,
            verbosity: Verbosity::from_flags(self.verbose, self.quiet),
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the override plugin and prints the resulting autoload section
    #[command(name = "dump-autoload", visible_alias = "dumpautoload")]
    DumpAutoload(dump_autoload::DumpAutoloadArgs),

    /// Lists override files and the vendor files they replace
    List(list::ListArgs),

    /// Validates the override_files section of composer.json
    Validate(validate::ValidateArgs),
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Canonical project root.
    pub root: PathBuf,
    /// Output verbosity.
    pub verbosity: Verbosity,
}

const fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Green.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Green.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default())
        .placeholder(clap::builder::styling::AnsiColor::Yellow.on_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["override-files", "dump-autoload", "-vv", "--write"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::DumpAutoload(dump_autoload::DumpAutoloadArgs { write: true })
        ));
    }

    #[test]
    fn quiet_wins_over_verbose() {
        let cli = Cli::parse_from(["override-files", "-q", "-v", "list"]);
        let ctx = cli.context().unwrap();
        assert_eq!(ctx.verbosity, Verbosity::Quiet);
    }
}
