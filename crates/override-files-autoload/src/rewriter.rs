//! Autoload rewriting.
//!
//! Both strategies share one pipeline. For every entry the vendor file is
//! excluded from the classmap and its namespace is pointed at the override
//! directory through `psr-4`. The origin-delegation strategy additionally
//! writes an origin file and loads it through `files`, because nothing else
//! would autoload a class under its new name.

use crate::entry::{EntryRecord, OverrideEntry};
use crate::origin::OriginFileGenerator;
use override_files_config::AutoloadConfig;
use override_files_core::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// How overrides are wired into the autoload configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Exclude the vendor file and map its namespace to the override directory.
    #[default]
    PlainOverride,
    /// Like [`Strategy::PlainOverride`], plus an always-loaded origin copy.
    OriginDelegation,
}

impl Strategy {
    /// Strategy selected by the `generate_origin_file` option.
    #[must_use]
    pub const fn from_origin_flag(generate_origin_file: bool) -> Self {
        if generate_origin_file {
            Self::OriginDelegation
        } else {
            Self::PlainOverride
        }
    }

    /// Get strategy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainOverride => "plain-override",
            Self::OriginDelegation => "origin-delegation",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an entry had no effect on the autoload configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The vendor file has no project-relative path.
    EmptyVendorPath,
    /// The origin file has no project-relative path.
    EmptyOriginPath,
    /// The override directory has no project-relative path.
    EmptyOverridePath,
    /// The vendor file declares no namespace.
    MissingNamespace,
}

impl SkipReason {
    /// Get a short description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyVendorPath => "vendor file path is empty",
            Self::EmptyOriginPath => "origin file path is empty",
            Self::EmptyOverridePath => "override directory path is empty",
            Self::MissingNamespace => "no namespace declaration found",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry that was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// The entry.
    pub entry: EntryRecord,
    /// Why.
    pub reason: SkipReason,
}

/// Two entries mapping one namespace to different directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceConflict {
    /// `psr-4` prefix, including the trailing separator.
    pub prefix: String,
    /// Directory that was replaced.
    pub replaced: String,
    /// Directory that won.
    pub kept: String,
}

/// Result of a rewrite.
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// Updated autoload configuration.
    pub autoload: AutoloadConfig,
    /// Entries that were wired in, in order.
    pub applied: Vec<EntryRecord>,
    /// Entries that were left out.
    pub skipped: Vec<SkippedEntry>,
    /// `psr-4` prefixes claimed by more than one directory.
    pub conflicts: Vec<NamespaceConflict>,
}

/// Rewrites an autoload configuration for a set of overrides.
#[derive(Debug, Clone, Default)]
pub struct AutoloadRewriter {
    strategy: Strategy,
    generator: OriginFileGenerator,
}

impl AutoloadRewriter {
    /// Create a rewriter for `strategy`.
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            generator: OriginFileGenerator::new(),
        }
    }

    /// Selected strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Wire `entries` into `autoload`.
    ///
    /// Existing keys and values are kept; paths already listed are not added
    /// twice.
    ///
    /// # Errors
    /// Under [`Strategy::OriginDelegation`], returns the first origin
    /// generation error. Nothing is returned for the entries processed
    /// before it.
    pub fn rewrite(
        &self,
        entries: &[OverrideEntry],
        mut autoload: AutoloadConfig,
    ) -> Result<RewriteOutcome> {
        let mut psr4: BTreeMap<String, String> = BTreeMap::new();
        let mut applied = Vec::new();
        let mut skipped = Vec::new();
        let mut conflicts = Vec::new();

        for entry in entries {
            let origin_short = match self.strategy {
                Strategy::PlainOverride => None,
                Strategy::OriginDelegation => {
                    let origin_file = self.generator.generate(entry)?;
                    Some(entry.roots().short(&origin_file))
                }
            };

            let vendor_short = entry.vendor_file_short();
            let override_dir = entry.override_path_short();
            let namespace = match check(
                &vendor_short,
                origin_short.as_deref(),
                &override_dir,
                entry.namespace(),
            ) {
                Ok(namespace) => namespace,
                Err(reason) => {
                    warn!(
                        vendor_file = %vendor_short,
                        override_file = %entry.override_file_short(),
                        %reason,
                        "skipping override"
                    );
                    skipped.push(SkippedEntry {
                        entry: entry.record(),
                        reason,
                    });
                    continue;
                }
            };

            autoload.add_excluded(&vendor_short);
            if let Some(origin_short) = &origin_short {
                autoload.add_file(origin_short);
            }

            let prefix = format!("{namespace}\\");
            if let Some(replaced) = psr4.insert(prefix.clone(), override_dir.clone())
                && replaced != override_dir
            {
                warn!(%prefix, %replaced, kept = %override_dir, "namespace mapped to several override directories");
                conflicts.push(NamespaceConflict {
                    prefix,
                    replaced,
                    kept: override_dir,
                });
            }

            debug!(vendor_file = %vendor_short, strategy = %self.strategy, "applied override");
            applied.push(entry.record());
        }

        match self.strategy {
            Strategy::PlainOverride => autoload.merge_psr4(&psr4),
            Strategy::OriginDelegation if !psr4.is_empty() => autoload.merge_psr4(&psr4),
            Strategy::OriginDelegation => {}
        }

        Ok(RewriteOutcome {
            autoload,
            applied,
            skipped,
            conflicts,
        })
    }
}

/// Require every value an entry is wired in with.
fn check<'a>(
    vendor_short: &str,
    origin_short: Option<&str>,
    override_dir: &str,
    namespace: Option<&'a str>,
) -> std::result::Result<&'a str, SkipReason> {
    if vendor_short.is_empty() {
        return Err(SkipReason::EmptyVendorPath);
    }
    if origin_short.is_some_and(str::is_empty) {
        return Err(SkipReason::EmptyOriginPath);
    }
    if override_dir.is_empty() {
        return Err(SkipReason::EmptyOverridePath);
    }
    namespace.ok_or(SkipReason::MissingNamespace)
}
