//! Root manifest loading and persistence.

use crate::EXTRA_KEY;
use crate::env::EnvConfig;
use crate::error::{ConfigError, Result};
use crate::types::{AutoloadConfig, ComposerManifest};
use override_files_core::paths;
use serde::Serialize;
use sonic_rs::format::PrettyFormatter;
use sonic_rs::{JsonContainerTrait, JsonValueMutTrait, JsonValueTrait, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default vendor directory name.
const DEFAULT_VENDOR_DIR: &str = "vendor";

/// Indentation Composer writes composer.json with.
const INDENT: &[u8] = b"    ";

/// A project's root composer.json, kept both typed and as raw JSON.
///
/// The typed view answers questions, the raw view is what gets written back
/// so keys this tool does not model survive a save.
#[derive(Debug)]
pub struct ProjectManifest {
    /// Project root directory.
    root: PathBuf,
    /// Path to composer.json.
    path: PathBuf,
    /// Raw manifest contents.
    raw: Value,
    /// Typed view of the manifest.
    manifest: ComposerManifest,
    /// Environment overrides.
    env: EnvConfig,
}

impl ProjectManifest {
    /// Load the manifest of the project rooted at `root`.
    ///
    /// # Errors
    /// Returns error if the manifest cannot be read or parsed.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with_env(root, EnvConfig::from_env())
    }

    /// Load the manifest using explicit environment overrides.
    ///
    /// # Errors
    /// Returns error if the manifest cannot be read or parsed.
    pub fn load_with_env(root: impl Into<PathBuf>, env: EnvConfig) -> Result<Self> {
        let root = root.into();
        let path = match &env.composer {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => root.join(p),
            None => root.join("composer.json"),
        };

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        let raw: Value = sonic_rs::from_str(&content).map_err(|e| ConfigError::json(&path, &e))?;
        if !raw.is_object() {
            return Err(ConfigError::invalid_value(
                "composer.json",
                "the manifest must be a JSON object",
                "wrap the manifest contents in { }",
            ));
        }
        let manifest: ComposerManifest =
            sonic_rs::from_str(&content).map_err(|e| ConfigError::json(&path, &e))?;
        debug!(path = %path.display(), "loaded project manifest");

        Ok(Self {
            root,
            path,
            raw,
            manifest,
            env,
        })
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Typed view of the manifest.
    #[must_use]
    pub const fn manifest(&self) -> &ComposerManifest {
        &self.manifest
    }

    /// The `extra` section, if present.
    #[must_use]
    pub fn extra(&self) -> Option<&Value> {
        self.manifest.extra.as_ref()
    }

    /// The `extra.override_files` section, if present and not null.
    #[must_use]
    pub fn override_section(&self) -> Option<&Value> {
        self.extra()
            .and_then(|extra| extra.get(EXTRA_KEY))
            .filter(|section| !section.is_null())
    }

    /// Current root autoload configuration (empty if absent).
    #[must_use]
    pub fn autoload(&self) -> AutoloadConfig {
        self.manifest.autoload.clone().unwrap_or_default()
    }

    /// Absolute vendor directory.
    ///
    /// `COMPOSER_VENDOR_DIR` wins over `config.vendor-dir`, which wins over
    /// the default `vendor`. Relative values are resolved against the root.
    #[must_use]
    pub fn vendor_dir(&self) -> PathBuf {
        let configured = self
            .env
            .vendor_dir
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .or_else(|| {
                self.manifest
                    .config
                    .as_ref()
                    .and_then(|c| c.vendor_dir.clone())
            })
            .unwrap_or_else(|| DEFAULT_VENDOR_DIR.to_string());

        let dir = PathBuf::from(&configured);
        if dir.is_absolute() {
            paths::clean(&dir)
        } else {
            paths::join(&self.root, [configured])
        }
    }

    /// Replace the root autoload section.
    ///
    /// The raw document is updated in place: keys keep their position, new
    /// keys are appended and keys the new section drops are removed.
    ///
    /// # Errors
    /// Returns error if the configuration cannot be serialized.
    pub fn set_autoload(&mut self, autoload: AutoloadConfig) -> Result<()> {
        let value = sonic_rs::to_value(&autoload).map_err(|e| ConfigError::json(&self.path, &e))?;
        if let Some(object) = self.raw.as_object_mut() {
            match object.get_mut(&"autoload") {
                Some(existing) => merge_in_place(existing, value),
                None => {
                    object.insert("autoload", value);
                }
            }
        }
        self.manifest.autoload = Some(autoload);
        Ok(())
    }

    /// Render the manifest as pretty JSON with Composer's four-space indent.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut serializer =
            sonic_rs::Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(INDENT));
        self.raw
            .serialize(&mut serializer)
            .map_err(|e| ConfigError::json(&self.path, &e))?;
        Ok(String::from_utf8_lossy(&serializer.into_inner()).into_owned())
    }

    /// Write the manifest back to disk.
    ///
    /// # Errors
    /// Returns error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        std::fs::write(&self.path, json).map_err(|e| ConfigError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "saved project manifest");
        Ok(())
    }
}

/// Overwrite `target` with `source`, keeping the order of keys both share.
fn merge_in_place(target: &mut Value, source: Value) {
    if !(target.is_object() && source.is_object()) {
        *target = source;
        return;
    }
    let (Some(target), Some(source)) = (target.as_object_mut(), source.as_object()) else {
        return;
    };

    let stale: Vec<String> = target
        .iter()
        .filter(|(key, _)| source.get(key).is_none())
        .map(|(key, _)| key.to_string())
        .collect();
    for key in &stale {
        target.remove(key);
    }

    for (key, value) in source.iter() {
        match target.get_mut(&key) {
            Some(existing) => merge_in_place(existing, value.clone()),
            None => {
                target.insert(key, value.clone());
            }
        }
    }
}
