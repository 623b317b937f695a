//! Environment variable configuration support.

use std::path::PathBuf;

/// Composer environment variables that affect where files are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposerEnvVar {
    /// `COMPOSER_VENDOR_DIR` - vendor directory.
    VendorDir,
    /// COMPOSER - path to composer.json.
    Composer,
}

impl ComposerEnvVar {
    /// Get the environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VendorDir => "COMPOSER_VENDOR_DIR",
            Self::Composer => "COMPOSER",
        }
    }

    /// Get the value from environment.
    #[must_use]
    pub fn get(self) -> Option<String> {
        std::env::var(self.as_str()).ok().filter(|v| !v.is_empty())
    }

    /// Get as path.
    #[must_use]
    pub fn as_path(self) -> Option<PathBuf> {
        self.get().map(PathBuf::from)
    }
}

/// Environment configuration reader.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Path to composer.json (`COMPOSER`).
    pub composer: Option<PathBuf>,
    /// Vendor directory (`COMPOSER_VENDOR_DIR`).
    pub vendor_dir: Option<PathBuf>,
}

impl EnvConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            composer: ComposerEnvVar::Composer.as_path(),
            vendor_dir: ComposerEnvVar::VendorDir.as_path(),
        }
    }
}
