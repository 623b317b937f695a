//! override-files CLI - run the override-files plugin against a Composer project.
//!
//! Hosts the plugin outside of Composer: loads composer.json, dispatches
//! `pre-autoload-dump` and prints or writes back the resulting autoload
//! configuration.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod output;

use clap::Parser;
use commands::{Cli, Commands, Context};
use miette::Diagnostic;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        _ if cli.quiet => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    output::init(cli.no_ansi);

    let ctx = match cli.context() {
        Ok(ctx) => ctx,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match run_command(&cli, &ctx) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: &Cli, ctx: &Context) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::DumpAutoload(args) => commands::dump_autoload::run(args, ctx),
        Commands::List(args) => commands::list::run(args, ctx),
        Commands::Validate(args) => commands::validate::run(args, ctx),
    }
}

/// Print an error and its help text.
fn print_error(err: &anyhow::Error) {
    output::error(&err.to_string());

    let help = err
        .downcast_ref::<override_files_core::Error>()
        .and_then(Diagnostic::help)
        .or_else(|| {
            err.downcast_ref::<override_files_config::ConfigError>()
                .and_then(Diagnostic::help)
        });
    if let Some(help) = help {
        output::hint(&help.to_string());
    }
}
