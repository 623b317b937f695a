//! Error types for override-files operations.
//!
//! Each error has:
//! - A stable diagnostic code (e.g. `override_files::missing_vendor_file`)
//! - A message naming the file or option that caused it
//! - Optional help text on how to repair the project configuration
//!
//! Every variant is fatal for the run that produced it. Conditions that only
//! warrant a warning (an entry whose namespace cannot be parsed, say) are not
//! modelled as errors.

// False positive warnings from thiserror macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Step of origin-file generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginStep {
    /// Copying the vendor file to the origin path.
    Copy,
    /// Reading the fresh copy back.
    ReadBack,
    /// Writing the renamed class back.
    WriteBack,
}

impl OriginStep {
    /// Get a short description of the step.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::ReadBack => "read back",
            Self::WriteBack => "write back",
        }
    }
}

impl fmt::Display for OriginStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for override-files.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The `override_files` configuration is invalid.
    #[error("invalid override configuration: {message}")]
    #[diagnostic(
        code(override_files::config),
        help("check the `extra.override_files` section of composer.json")
    )]
    Config {
        /// Error message.
        message: String,
    },

    /// An override file has no counterpart in the vendor directory.
    #[error("can't override {}: file doesn't exist", vendor_file.display())]
    #[diagnostic(
        code(override_files::missing_vendor_file),
        help("remove the override or fix `path` / `base_vendor_dir` so it mirrors the vendor layout")
    )]
    MissingVendorFile {
        /// Vendor file that was expected.
        vendor_file: PathBuf,
        /// Override file that pointed at it.
        override_file: PathBuf,
    },

    /// A vendor file lacks a declaration the operation depends on.
    #[error("no {what} declaration found in {}", path.display())]
    #[diagnostic(
        code(override_files::unparseable_source),
        help("origin files can only be generated for files declaring a single non-abstract class")
    )]
    UnparseableSource {
        /// File that was scanned.
        path: PathBuf,
        /// Declaration that is missing ("class" or "namespace").
        what: &'static str,
    },

    /// Writing an origin file failed.
    #[error("failed to {step} origin file {}: {message}", path.display())]
    #[diagnostic(code(override_files::origin_generation))]
    OriginGeneration {
        /// Origin file path.
        path: PathBuf,
        /// Step that failed.
        step: OriginStep,
        /// Underlying error message.
        message: String,
    },

    /// A path that must exist does not resolve.
    #[error("path {} does not resolve: {message}", path.display())]
    #[diagnostic(code(override_files::path))]
    Path {
        /// Path that failed to resolve.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// IO error.
    #[error("io error at {}: {message}", path.display())]
    #[diagnostic(code(override_files::io))]
    Io {
        /// File path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// JSON error.
    #[error("json error: {0}")]
    #[diagnostic(code(override_files::json))]
    Json(#[from] sonic_rs::Error),
}

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an IO error with context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a path resolution error.
    #[must_use]
    pub fn path(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Path {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create an origin generation error.
    #[must_use]
    pub fn origin(path: impl Into<PathBuf>, step: OriginStep, err: std::io::Error) -> Self {
        Self::OriginGeneration {
            path: path.into(),
            step,
            message: err.to_string(),
        }
    }

    /// Check if the error stems from the project configuration rather than the
    /// environment.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::MissingVendorFile { .. } | Self::UnparseableSource { .. }
        )
    }
}

/// Result type alias for override-files operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn missing_vendor_file_names_the_path() {
        let err = Error::MissingVendorFile {
            vendor_file: PathBuf::from("/p/vendor/acme/lib/src/Bar.php"),
            override_file: PathBuf::from("/p/overrides/Acme/Bar.php"),
        };
        assert_eq!(
            err.to_string(),
            "can't override /p/vendor/acme/lib/src/Bar.php: file doesn't exist"
        );
        assert!(err.is_configuration());
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("override_files::missing_vendor_file")
        );
    }

    #[test]
    fn origin_error_names_step() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::origin("/p/vendor/OriginFoo.php", OriginStep::WriteBack, io);
        assert!(err.to_string().starts_with("failed to write back origin file"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn io_error_keeps_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io("/tmp/x", io);
        assert!(err.to_string().contains("gone"));
        assert!(err.help().is_none());
    }
}
