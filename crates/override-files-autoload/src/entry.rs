//! Matched override/vendor file pairs.

use crate::introspect::{extract_class_name, extract_namespace};
use override_files_core::{Error, Result, paths};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Prefix given to renamed origin classes and their files.
pub const ORIGIN_PREFIX: &str = "Origin";

/// The three roots every entry is resolved against.
///
/// Shared by all entries of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRoots {
    root: PathBuf,
    base: PathBuf,
    vendor: PathBuf,
}

impl OverrideRoots {
    /// Create roots from already normalized paths.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, base: impl Into<PathBuf>, vendor: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            base: base.into(),
            vendor: vendor.into(),
        }
    }

    /// Resolve roots for a project.
    ///
    /// `override_dir` is relative to `root`. All three must exist.
    ///
    /// # Errors
    /// Returns [`Error::Path`] if a root does not resolve.
    pub fn resolve(root: &Path, override_dir: &str, vendor: &Path) -> Result<Self> {
        let root = paths::normalize(root)?;
        let base = paths::resolve(&root, [override_dir])?;
        let vendor = paths::normalize(vendor)?;
        Ok(Self { root, base, vendor })
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Override directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Vendor directory.
    #[must_use]
    pub fn vendor(&self) -> &Path {
        &self.vendor
    }

    /// Project-relative form of `path`.
    #[must_use]
    pub fn short(&self, path: &Path) -> String {
        paths::relative_to(&self.root, path)
    }
}

/// Path of the origin copy of `vendor_file`: a sibling named `Origin<file name>`.
#[must_use]
pub fn origin_path_for(vendor_file: &Path) -> PathBuf {
    let file_name = vendor_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    vendor_file.with_file_name(format!("{ORIGIN_PREFIX}{file_name}"))
}

/// One override file matched with the vendor file it replaces.
#[derive(Debug, Clone)]
pub struct OverrideEntry {
    roots: Arc<OverrideRoots>,
    override_file: PathBuf,
    vendor_file: PathBuf,
    origin_file: Option<PathBuf>,
    namespace: Option<String>,
    class_name: Option<String>,
}

impl OverrideEntry {
    /// Match `override_file` with `vendor_file`.
    ///
    /// The vendor file is read once here to pick up its namespace and class.
    ///
    /// # Errors
    /// Returns [`Error::MissingVendorFile`] if the vendor file does not exist,
    /// or [`Error::Io`] if it cannot be read.
    pub fn new(
        roots: Arc<OverrideRoots>,
        override_file: PathBuf,
        vendor_file: PathBuf,
        generate_origin: bool,
    ) -> Result<Self> {
        if !vendor_file.is_file() {
            return Err(Error::MissingVendorFile {
                vendor_file,
                override_file,
            });
        }

        let bytes = std::fs::read(&vendor_file).map_err(|e| Error::io(&vendor_file, e))?;
        let source = String::from_utf8_lossy(&bytes);
        let namespace = extract_namespace(&source);
        let class_name = extract_class_name(&source);
        let origin_file = generate_origin.then(|| origin_path_for(&vendor_file));

        Ok(Self {
            roots,
            override_file,
            vendor_file,
            origin_file,
            namespace,
            class_name,
        })
    }

    /// Roots this entry was resolved against.
    #[must_use]
    pub fn roots(&self) -> &OverrideRoots {
        &self.roots
    }

    /// Absolute override file.
    #[must_use]
    pub fn override_file(&self) -> &Path {
        &self.override_file
    }

    /// Directory containing the override file.
    #[must_use]
    pub fn override_path(&self) -> &Path {
        self.override_file.parent().unwrap_or(&self.roots.base)
    }

    /// Absolute vendor file.
    #[must_use]
    pub fn vendor_file(&self) -> &Path {
        &self.vendor_file
    }

    /// Origin file, when origin generation is enabled.
    #[must_use]
    pub fn origin_file(&self) -> Option<&Path> {
        self.origin_file.as_deref()
    }

    /// Namespace declared by the vendor file.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Class declared by the vendor file.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Name the vendor class is renamed to in the origin file.
    #[must_use]
    pub fn origin_class_name(&self) -> Option<String> {
        self.origin_file.as_ref()?;
        self.class_name
            .as_ref()
            .map(|name| format!("{ORIGIN_PREFIX}{name}"))
    }

    /// Project-relative override file.
    #[must_use]
    pub fn override_file_short(&self) -> String {
        self.roots.short(&self.override_file)
    }

    /// Project-relative override directory.
    #[must_use]
    pub fn override_path_short(&self) -> String {
        self.roots.short(self.override_path())
    }

    /// Project-relative vendor file.
    #[must_use]
    pub fn vendor_file_short(&self) -> String {
        self.roots.short(&self.vendor_file)
    }

    /// Project-relative origin file.
    #[must_use]
    pub fn origin_file_short(&self) -> Option<String> {
        self.origin_file.as_deref().map(|p| self.roots.short(p))
    }

    /// Structured view for reports and debug dumps.
    #[must_use]
    pub fn record(&self) -> EntryRecord {
        EntryRecord {
            override_file: self.override_file_short(),
            override_path: self.override_path_short(),
            vendor_file: self.vendor_file_short(),
            origin_file: self.origin_file_short(),
            namespace: self.namespace.clone(),
            class_name: self.class_name.clone(),
            origin_class_name: self.origin_class_name(),
        }
    }
}

/// Serializable summary of an [`OverrideEntry`], with project-relative paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    /// Override file.
    pub override_file: String,
    /// Override directory.
    pub override_path: String,
    /// Vendor file.
    pub vendor_file: String,
    /// Origin file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_file: Option<String>,
    /// Vendor namespace.
    pub namespace: Option<String>,
    /// Vendor class.
    pub class_name: Option<String>,
    /// Renamed vendor class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_class_name: Option<String>,
}
