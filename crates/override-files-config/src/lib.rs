//! composer.json loading and `override_files` configuration.
//!
//! The override configuration lives in the root manifest under
//! `extra.override_files`:
//!
//! ```json
//! {
//!     "extra": {
//!         "override_files": {
//!             "path": "overrides",
//!             "base_vendor_dir": "acme/lib/src",
//!             "generate_origin_file": true
//!         }
//!     }
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod env;
pub mod error;
pub mod loader;
pub mod types;
pub mod validate;

pub use env::{ComposerEnvVar, EnvConfig};
pub use error::{ConfigError, Result};
pub use loader::ProjectManifest;
pub use types::{AutoloadConfig, AutoloadPath, ComposerConfig, ComposerManifest, OverrideFilesConfig};
pub use validate::{Severity, ValidationIssue, ValidationResult, validate_override_config};

/// Key of the override section inside the manifest's `extra` object.
pub const EXTRA_KEY: &str = "override_files";
