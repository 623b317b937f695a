//! Temporary project creation and management for integration tests.
//!
//! A project is a directory with a composer.json, a vendor directory and an
//! override directory, laid out the way Composer would leave them.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

use crate::fixtures::Fixtures;

/// A temporary project directory for testing.
///
/// The project is automatically cleaned up when this struct is dropped.
#[derive(Debug)]
pub struct TempProject {
    /// The temporary directory containing the project.
    dir: TempDir,
    /// Path to composer.json.
    composer_json_path: PathBuf,
    /// Path to vendor directory.
    vendor_path: PathBuf,
}

impl TempProject {
    /// Create a new temporary project builder.
    #[must_use]
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> TempProjectBuilder {
        TempProjectBuilder::default()
    }

    /// Get the root directory of the project.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the canonical root directory of the project.
    ///
    /// Temporary directories may live behind a symlink (macOS `/var`).
    pub fn canonical_path(&self) -> Result<PathBuf> {
        fs::canonicalize(self.dir.path()).context("Failed to canonicalize project root")
    }

    /// Get the path to composer.json.
    #[must_use]
    pub fn composer_json_path(&self) -> &Path {
        &self.composer_json_path
    }

    /// Get the path to vendor directory.
    #[must_use]
    pub fn vendor_path(&self) -> &Path {
        &self.vendor_path
    }

    /// Read composer.json content.
    pub fn read_composer_json(&self) -> Result<Value> {
        let content =
            fs::read_to_string(&self.composer_json_path).context("Failed to read composer.json")?;
        serde_json::from_str(&content).context("Failed to parse composer.json")
    }

    /// Read the raw bytes of composer.json.
    pub fn read_composer_json_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.composer_json_path).context("Failed to read composer.json")
    }

    /// Write content to composer.json.
    pub fn write_composer_json(&self, content: &Value) -> Result<()> {
        let json = serde_json::to_string_pretty(content)?;
        fs::write(&self.composer_json_path, json).context("Failed to write composer.json")
    }

    /// Create a file in the project directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        write_file(self.dir.path(), relative_path, content)
    }

    /// Create a directory in the project.
    pub fn create_dir(&self, relative_path: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Check if a file exists in the project.
    #[must_use]
    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.dir.path().join(relative_path).exists()
    }

    /// Read a file from the project.
    pub fn read_file(&self, relative_path: &str) -> Result<String> {
        let path = self.dir.path().join(relative_path);
        fs::read_to_string(&path).with_context(|| format!("Failed to read file: {relative_path}"))
    }
}

/// Builder for creating temporary projects.
#[derive(Debug, Default)]
pub struct TempProjectBuilder {
    composer_json: Option<Value>,
    create_vendor: bool,
    dirs: Vec<String>,
    files: Vec<(String, String)>,
}

impl TempProjectBuilder {
    /// Set the composer.json content.
    #[must_use]
    pub fn with_composer_json(mut self, content: Value) -> Self {
        self.composer_json = Some(content);
        self
    }

    /// Create an empty vendor directory.
    #[must_use]
    pub fn with_vendor(mut self) -> Self {
        self.create_vendor = true;
        self
    }

    /// Create an empty directory.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<String>) -> Self {
        self.dirs.push(path.into());
        self
    }

    /// Add a file to be created, relative to the project root.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    /// Add a file under the vendor directory.
    #[must_use]
    pub fn with_vendor_file(self, path: &str, content: impl Into<String>) -> Self {
        self.with_vendor().with_file(format!("vendor/{path}"), content)
    }

    /// Add an override file, relative to the project root.
    #[must_use]
    pub fn with_override_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_file(path, content)
    }

    /// Build the temporary project.
    pub fn build(self) -> Result<TempProject> {
        let dir = tempdir().context("Failed to create temp directory")?;
        let root = dir.path();

        let composer_json_path = root.join("composer.json");
        let composer_json = self
            .composer_json
            .unwrap_or_else(Fixtures::plain_composer_json);
        let json_content = serde_json::to_string_pretty(&composer_json)?;
        fs::write(&composer_json_path, json_content).context("Failed to write composer.json")?;

        let vendor_path = root.join("vendor");
        if self.create_vendor {
            fs::create_dir_all(&vendor_path).context("Failed to create vendor directory")?;
        }

        for path in &self.dirs {
            fs::create_dir_all(root.join(path))
                .with_context(|| format!("Failed to create directory: {path}"))?;
        }

        for (path, content) in &self.files {
            write_file(root, path, content)?;
        }

        Ok(TempProject {
            dir,
            composer_json_path,
            vendor_path,
        })
    }
}

fn write_file(root: &Path, relative_path: &str, content: &str) -> Result<PathBuf> {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write file: {relative_path}"))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_layout() {
        let project = TempProject::new()
            .with_composer_json(Fixtures::override_composer_json("overrides", false))
            .with_vendor_file("acme/lib/src/Foo.php", Fixtures::php_class("Acme\\Lib", "Foo"))
            .with_override_file("overrides/Foo.php", "<?php\n")
            .with_dir("empty")
            .build()
            .unwrap();

        assert!(project.vendor_path().is_dir());
        assert!(project.file_exists("vendor/acme/lib/src/Foo.php"));
        assert!(project.file_exists("overrides/Foo.php"));
        assert!(project.path().join("empty").is_dir());

        let manifest = project.read_composer_json().unwrap();
        assert_eq!(manifest["extra"]["override_files"]["path"], "overrides");
    }

    #[test]
    fn default_manifest_has_no_overrides() {
        let project = TempProject::new().build().unwrap();
        let manifest = project.read_composer_json().unwrap();
        assert!(manifest.get("extra").is_none());
        assert!(!project.vendor_path().exists());
    }
}
