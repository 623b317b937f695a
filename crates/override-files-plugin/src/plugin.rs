//! The override-files plugin.

use crate::dispatch::Plugin;
use crate::hooks::Hook;
use crate::host::Host;
use crate::io::{Io, Verbosity};
use override_files_autoload::{
    AutoloadRewriter, EntryRecord, OverrideDiscovery, OverrideEntry, RewriteOutcome, Strategy,
};
use override_files_config::{EXTRA_KEY, OverrideFilesConfig};
use override_files_core::{Result, to_json_pretty};
use sonic_rs::JsonValueTrait;
use tracing::{debug, info};

/// Wires project override files into the autoload configuration on
/// `pre-autoload-dump`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideFilesPlugin;

impl OverrideFilesPlugin {
    /// Plugin name.
    pub const NAME: &'static str = "override-files";

    /// Create the plugin.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read and validate the `override_files` section.
    ///
    /// Returns `None` when the section is absent or null. Warnings are
    /// reported to `io`.
    ///
    /// # Errors
    /// Returns a configuration error describing every validation failure.
    pub fn load_config(host: &dyn Host, io: &mut dyn Io) -> Result<Option<OverrideFilesConfig>> {
        let Some(section) = host
            .extra()
            .and_then(|extra| extra.get(EXTRA_KEY))
            .filter(|section| !section.is_null())
        else {
            return Ok(None);
        };

        let vendor_dir = host.vendor_dir();
        let (config, warnings) =
            OverrideFilesConfig::from_section(section, host.root_dir(), &vendor_dir)?;
        for warning in &warnings {
            io.warning(&warning.message);
        }
        debug!(?config, "loaded override configuration");
        Ok(Some(config))
    }

    /// Match every override file with its vendor file.
    ///
    /// # Errors
    /// Returns an error if a root does not resolve or an override has no
    /// vendor counterpart.
    pub fn discover(host: &dyn Host, config: &OverrideFilesConfig) -> Result<Vec<OverrideEntry>> {
        OverrideDiscovery::from_config(host.root_dir(), &host.vendor_dir(), config)?.discover()
    }

    /// Run the whole pipeline against `host`.
    ///
    /// Nothing is handed back to the host unless every step succeeds.
    ///
    /// # Errors
    /// Returns the first fatal error: invalid configuration, a missing vendor
    /// file or a failed origin file.
    pub fn pre_autoload_dump(host: &mut dyn Host, io: &mut dyn Io) -> Result<()> {
        let Some(config) = Self::load_config(host, io)? else {
            io.write(
                Verbosity::VeryVerbose,
                "No override_files configuration found, nothing to override",
            );
            return Ok(());
        };

        let entries = Self::discover(host, &config)?;
        let strategy = Strategy::from_origin_flag(config.generate_origin_file);
        io.write(
            Verbosity::Verbose,
            &format!(
                "Found {} override file(s) in {}, using {strategy}",
                entries.len(),
                config.path
            ),
        );

        let outcome = AutoloadRewriter::new(strategy).rewrite(&entries, host.autoload())?;
        report(&entries, &outcome, io)?;

        info!(
            applied = outcome.applied.len(),
            skipped = outcome.skipped.len(),
            %strategy,
            "rewrote autoload configuration"
        );
        host.set_autoload(outcome.autoload)
    }
}

impl Plugin for OverrideFilesPlugin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn subscribed_hooks(&self) -> Vec<Hook> {
        vec![Hook::PreAutoloadDump]
    }

    fn handle(&self, hook: Hook, host: &mut dyn Host, io: &mut dyn Io) -> Result<()> {
        match hook {
            Hook::PreAutoloadDump => Self::pre_autoload_dump(host, io),
            _ => Ok(()),
        }
    }
}

fn report(entries: &[OverrideEntry], outcome: &RewriteOutcome, io: &mut dyn Io) -> Result<()> {
    for record in &outcome.applied {
        io.write_override(&record.vendor_file, &record.override_file);
        if let Some(origin_file) = &record.origin_file {
            io.write(
                Verbosity::Verbose,
                &format!("Generated origin file: {origin_file}"),
            );
        }
    }
    for skipped in &outcome.skipped {
        io.warning(&format!(
            "Skipped {} => {}: {}",
            skipped.entry.vendor_file, skipped.entry.override_file, skipped.reason
        ));
    }
    for conflict in &outcome.conflicts {
        io.warning(&format!(
            "Namespace {} is overridden from both {} and {}, using {}",
            conflict.prefix, conflict.replaced, conflict.kept, conflict.kept
        ));
    }

    if io.is_enabled(Verbosity::Debug) {
        let records: Vec<EntryRecord> = entries.iter().map(OverrideEntry::record).collect();
        io.write(
            Verbosity::Debug,
            &format!("Override entries:\n{}", to_json_pretty(&records)?),
        );
        io.write(
            Verbosity::Debug,
            &format!("Autoload configuration:\n{}", to_json_pretty(&outcome.autoload)?),
        );
    }
    Ok(())
}
