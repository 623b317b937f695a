//! Manifest and configuration types.
//!
//! Only the parts of composer.json this tool reads or writes are modelled.
//! Unknown keys are captured in flattened maps so a rewritten section keeps
//! everything the host put there. Flattened maps hold `serde_json::Value`:
//! `sonic_rs::Value` does not deserialize through serde's flatten buffer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Autoload configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AutoloadConfig {
    /// PSR-4 autoloading rules.
    #[serde(rename = "psr-4", skip_serializing_if = "Option::is_none")]
    pub psr4: Option<BTreeMap<String, AutoloadPath>>,
    /// PSR-0 autoloading rules.
    #[serde(rename = "psr-0", skip_serializing_if = "Option::is_none")]
    pub psr0: Option<BTreeMap<String, AutoloadPath>>,
    /// Classmap directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classmap: Option<Vec<String>>,
    /// Files to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Excluded paths from classmap.
    #[serde(
        rename = "exclude-from-classmap",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude_from_classmap: Option<Vec<String>>,
    /// Keys this tool does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AutoloadConfig {
    /// Add a path to `exclude-from-classmap`.
    ///
    /// Returns `false` if the path was already listed.
    pub fn add_excluded(&mut self, path: &str) -> bool {
        push_unique(self.exclude_from_classmap.get_or_insert_with(Vec::new), path)
    }

    /// Add a path to `files`.
    ///
    /// Returns `false` if the path was already listed.
    pub fn add_file(&mut self, path: &str) -> bool {
        push_unique(self.files.get_or_insert_with(Vec::new), path)
    }

    /// Merge namespace mappings into `psr-4`.
    ///
    /// Keys present in `mappings` replace existing entries, all other keys
    /// are left as they were. The `psr-4` key is created even when
    /// `mappings` is empty.
    pub fn merge_psr4(&mut self, mappings: &BTreeMap<String, String>) {
        let psr4 = self.psr4.get_or_insert_with(BTreeMap::new);
        for (namespace, path) in mappings {
            psr4.insert(namespace.clone(), AutoloadPath::Single(path.clone()));
        }
    }

    /// Paths listed in `exclude-from-classmap`.
    #[must_use]
    pub fn excluded(&self) -> &[String] {
        self.exclude_from_classmap.as_deref().unwrap_or_default()
    }

    /// Paths listed in `files`.
    #[must_use]
    pub fn included_files(&self) -> &[String] {
        self.files.as_deref().unwrap_or_default()
    }
}

fn push_unique(list: &mut Vec<String>, path: &str) -> bool {
    if list.iter().any(|existing| existing == path) {
        return false;
    }
    list.push(path.to_string());
    true
}

/// Autoload path (single or multiple).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AutoloadPath {
    /// Single path.
    Single(String),
    /// Multiple paths.
    Multiple(Vec<String>),
}

impl AutoloadPath {
    /// Get paths as a vector.
    #[must_use]
    pub fn as_vec(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// The `config` section of composer.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ComposerConfig {
    /// Vendor directory, relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_dir: Option<String>,
    /// Options this tool does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The parts of a composer.json manifest this tool reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ComposerManifest {
    /// Package name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Autoload configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoload: Option<AutoloadConfig>,
    /// Configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ComposerConfig>,
    /// Extra metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<sonic_rs::Value>,
}

/// Validated `extra.override_files` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideFilesConfig {
    /// Override directory, relative to the project root.
    pub path: String,
    /// Sub-directory of the vendor root that override files mirror.
    pub base_vendor_dir: Option<String>,
    /// Generate `Origin*` copies and use the origin-delegation strategy.
    pub generate_origin_file: bool,
}
