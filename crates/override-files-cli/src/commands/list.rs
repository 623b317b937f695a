//! List command implementation.

use crate::commands::Context;
use crate::output::{ConsoleIo, table::Table};
use anyhow::Result;
use clap::Args;
use override_files_autoload::{EntryRecord, OverrideEntry};
use override_files_config::ProjectManifest;
use override_files_core::to_json_pretty;
use override_files_plugin::{Io, OverrideFilesPlugin, Verbosity};
use std::process::ExitCode;
use tracing::info;

/// Arguments for the list command.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Run the list command.
///
/// Only reads the project: no origin file is written and composer.json is
/// left alone.
pub fn run(args: &ListArgs, ctx: &Context) -> Result<ExitCode> {
    info!("running list command");

    let manifest = ProjectManifest::load(&ctx.root)?;
    let mut io = ConsoleIo::new(ctx.verbosity);
    let Some(config) = OverrideFilesPlugin::load_config(&manifest, &mut io)? else {
        io.write(Verbosity::Normal, "No override_files configuration found");
        return Ok(ExitCode::SUCCESS);
    };
    let entries = OverrideFilesPlugin::discover(&manifest, &config)?;

    if args.format == "json" {
        let records: Vec<EntryRecord> = entries.iter().map(OverrideEntry::record).collect();
        println!("{}", to_json_pretty(&records)?);
        return Ok(ExitCode::SUCCESS);
    }

    if entries.is_empty() {
        io.write(
            Verbosity::Normal,
            &format!("No override files found in {}", config.path),
        );
        return Ok(ExitCode::SUCCESS);
    }

    let mut table = Table::new();
    table.headers(["Vendor file", "Override file", "Namespace", "Class"]);
    for entry in &entries {
        table.row([
            entry.vendor_file_short(),
            entry.override_file_short(),
            entry.namespace().unwrap_or("-").to_string(),
            entry.class_name().unwrap_or("-").to_string(),
        ]);
    }
    table.print();
    Ok(ExitCode::SUCCESS)
}
