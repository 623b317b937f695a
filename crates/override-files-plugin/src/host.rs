//! The dependency manager as seen by a plugin.

use override_files_config::{AutoloadConfig, ProjectManifest};
use override_files_core::Result;
use sonic_rs::Value;
use std::path::{Path, PathBuf};

/// What a plugin may read from and hand back to its host.
pub trait Host {
    /// Project root directory.
    fn root_dir(&self) -> &Path;

    /// Absolute vendor directory.
    fn vendor_dir(&self) -> PathBuf;

    /// The root package's `extra` section.
    fn extra(&self) -> Option<&Value>;

    /// The root package's current autoload configuration.
    fn autoload(&self) -> AutoloadConfig;

    /// Replace the root package's autoload configuration.
    fn set_autoload(&mut self, autoload: AutoloadConfig) -> Result<()>;
}

impl Host for ProjectManifest {
    fn root_dir(&self) -> &Path {
        self.root()
    }

    fn vendor_dir(&self) -> PathBuf {
        Self::vendor_dir(self)
    }

    fn extra(&self) -> Option<&Value> {
        Self::extra(self)
    }

    fn autoload(&self) -> AutoloadConfig {
        Self::autoload(self)
    }

    fn set_autoload(&mut self, autoload: AutoloadConfig) -> Result<()> {
        Self::set_autoload(self, autoload)?;
        Ok(())
    }
}
