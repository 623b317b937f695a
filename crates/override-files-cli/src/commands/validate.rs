//! Validate command implementation.

use crate::commands::Context;
use crate::output;
use anyhow::Result;
use clap::Args;
use console::style;
use override_files_config::{EXTRA_KEY, ProjectManifest, Severity, validate_override_config};
use override_files_plugin::Verbosity;
use std::process::ExitCode;
use tracing::info;

/// Arguments for the validate command.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Strict mode (warnings as errors)
    #[arg(long)]
    pub strict: bool,
}

/// Run the validate command.
pub fn run(args: &ValidateArgs, ctx: &Context) -> Result<ExitCode> {
    info!("running validate command");

    let manifest = ProjectManifest::load(&ctx.root)?;
    let quiet = ctx.verbosity == Verbosity::Quiet;
    let Some(section) = manifest.override_section() else {
        if !quiet {
            println!("No {EXTRA_KEY} configuration found in {}", manifest.path().display());
        }
        return Ok(ExitCode::SUCCESS);
    };

    let result = validate_override_config(section, manifest.root(), &manifest.vendor_dir());
    for issue in result
        .issues
        .iter()
        .filter(|issue| !quiet || issue.severity == Severity::Error)
    {
        let label = match issue.severity {
            Severity::Error => style("Error:").red().bold(),
            Severity::Warning => style("Warning:").yellow().bold(),
            Severity::Info => style("Info:").blue().bold(),
        };
        eprintln!("{label} [{}] {}", issue.field, issue.message);
        if let Some(hint) = &issue.hint {
            output::hint(hint);
        }
    }

    let failed = result.has_errors() || (args.strict && result.warning_count() > 0);
    if failed {
        output::error(&format!(
            "{} is invalid: {} error(s), {} warning(s)",
            EXTRA_KEY,
            result.error_count(),
            result.warning_count()
        ));
        return Ok(ExitCode::FAILURE);
    }

    if !quiet {
        output::success(&format!("{EXTRA_KEY} is valid"));
    }
    Ok(ExitCode::SUCCESS)
}
