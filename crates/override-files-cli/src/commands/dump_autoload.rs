//! Dump-autoload command implementation.

use crate::commands::Context;
use crate::output::{self, ConsoleIo};
use anyhow::Result;
use clap::Args;
use override_files_config::ProjectManifest;
use override_files_core::to_json_pretty;
use override_files_plugin::{Hook, HookDispatcher, OverrideFilesPlugin, Verbosity};
use std::process::ExitCode;
use tracing::{debug, info};

/// Arguments for the dump-autoload command.
#[derive(Args, Debug, Clone)]
pub struct DumpAutoloadArgs {
    /// Write the updated autoload section back into composer.json
    #[arg(long)]
    pub write: bool,
}

/// Run the dump-autoload command.
pub fn run(args: &DumpAutoloadArgs, ctx: &Context) -> Result<ExitCode> {
    info!("running dump-autoload command");

    let mut manifest = ProjectManifest::load(&ctx.root)?;
    let before = manifest.autoload();
    let mut io = ConsoleIo::new(ctx.verbosity);

    let dispatcher = HookDispatcher::new().with(OverrideFilesPlugin::new());
    let handled = dispatcher.dispatch(Hook::PreAutoloadDump, &mut manifest, &mut io)?;
    debug!(handled, "dispatched pre-autoload-dump");

    let autoload = manifest.autoload();
    if !args.write {
        println!("{}", to_json_pretty(&autoload)?);
        return Ok(ExitCode::SUCCESS);
    }

    if autoload == before {
        debug!("autoload configuration unchanged, not writing");
    } else {
        manifest.save()?;
        if ctx.verbosity > Verbosity::Quiet {
            output::success(&format!(
                "Updated autoload configuration in {}",
                manifest.path().display()
            ));
        }
    }
    Ok(ExitCode::SUCCESS)
}
