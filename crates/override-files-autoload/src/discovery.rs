//! Override directory walking.

use crate::entry::{OverrideEntry, OverrideRoots};
use override_files_config::OverrideFilesConfig;
use override_files_core::{Error, Result, paths};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Finds override files and matches them with vendor files.
///
/// Every regular file under the override directory is expected to mirror a
/// file under the vendor directory (or under `base_vendor_dir` inside it).
#[derive(Debug, Clone)]
pub struct OverrideDiscovery {
    roots: Arc<OverrideRoots>,
    base_vendor_dir: Option<String>,
    generate_origin: bool,
}

impl OverrideDiscovery {
    /// Create a discovery over `roots`.
    #[must_use]
    pub fn new(roots: Arc<OverrideRoots>) -> Self {
        Self {
            roots,
            base_vendor_dir: None,
            generate_origin: false,
        }
    }

    /// Resolve roots and options from a validated configuration.
    ///
    /// # Errors
    /// Returns [`Error::Path`] if the project, override or vendor directory
    /// does not resolve.
    pub fn from_config(root: &Path, vendor_dir: &Path, config: &OverrideFilesConfig) -> Result<Self> {
        let roots = OverrideRoots::resolve(root, &config.path, vendor_dir)?;
        Ok(Self::new(Arc::new(roots))
            .base_vendor_dir(config.base_vendor_dir.clone())
            .generate_origin(config.generate_origin_file))
    }

    /// Match against a sub-directory of the vendor directory.
    #[must_use]
    pub fn base_vendor_dir(mut self, dir: Option<String>) -> Self {
        self.base_vendor_dir = dir.filter(|d| !d.is_empty());
        self
    }

    /// Record origin files on the discovered entries.
    #[must_use]
    pub const fn generate_origin(mut self, generate: bool) -> Self {
        self.generate_origin = generate;
        self
    }

    /// Shared roots.
    #[must_use]
    pub fn roots(&self) -> &Arc<OverrideRoots> {
        &self.roots
    }

    /// Walk the override directory.
    ///
    /// Directories are visited in file-name order. The first override file
    /// without a vendor counterpart aborts the walk.
    ///
    /// # Errors
    /// Returns [`Error::MissingVendorFile`] for a dangling override, or
    /// [`Error::Io`] if the directory cannot be walked.
    pub fn discover(&self) -> Result<Vec<OverrideEntry>> {
        let base = self.roots.base();
        let mut entries = Vec::new();

        for item in WalkDir::new(base).follow_links(true).sort_by_file_name() {
            let item = item.map_err(|e| {
                let path = e.path().unwrap_or(base).to_path_buf();
                Error::io(path, e.into())
            })?;
            if !item.file_type().is_file() {
                continue;
            }

            let override_file = item.into_path();
            let relative = override_file.strip_prefix(base).unwrap_or(&override_file);
            let relative = paths::to_slash(relative);
            let vendor_file = paths::join(
                self.roots.vendor(),
                self.base_vendor_dir.iter().map(String::as_str).chain([relative.as_str()]),
            );
            debug!(
                override_file = %override_file.display(),
                vendor_file = %vendor_file.display(),
                "matched override file"
            );

            entries.push(OverrideEntry::new(
                Arc::clone(&self.roots),
                override_file,
                vendor_file,
                self.generate_origin,
            )?);
        }

        info!(count = entries.len(), base = %base.display(), "discovered override files");
        Ok(entries)
    }
}
