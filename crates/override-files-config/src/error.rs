//! Errors raised while reading composer.json and its override section.

// False positive warnings from thiserror macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Manifest and override configuration errors.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    /// The manifest file does not exist.
    #[error("manifest not found: {path}")]
    #[diagnostic(
        code(config::not_found),
        help("run the command from the project root, pass --working-dir or set COMPOSER")
    )]
    NotFound {
        /// Expected manifest path.
        path: PathBuf,
    },

    /// The manifest is not valid JSON.
    #[error("invalid JSON in {path}: {message}")]
    #[diagnostic(
        code(config::invalid_json),
        help("check JSON syntax at line {line}, column {column}")
    )]
    InvalidJson {
        /// Manifest path.
        path: PathBuf,
        /// Parser message.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// A required option is absent.
    #[error("missing required option '{field}'")]
    #[diagnostic(code(config::missing_field), help("add '{field}' to the section"))]
    MissingField {
        /// Dotted option path.
        field: String,
    },

    /// A value has the right type but cannot be used.
    #[error("invalid value for '{field}': {message}")]
    #[diagnostic(code(config::invalid_value), help("{hint}"))]
    InvalidValue {
        /// Dotted option path.
        field: String,
        /// What is wrong.
        message: String,
        /// How to fix it.
        hint: String,
    },

    /// Reading or writing the manifest failed.
    #[error("IO error at {path}: {message}")]
    #[diagnostic(code(config::io_error))]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The override section has one or more errors.
    #[error("override configuration has {count} error(s): {}", errors.join("; "))]
    #[diagnostic(code(config::validation_failed))]
    ValidationFailed {
        /// Number of errors.
        count: usize,
        /// Error messages, in the order they were found.
        errors: Vec<String>,
    },
}

impl ConfigError {
    /// Wrap an IO error on `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound { path };
        }
        Self::Io {
            path,
            message: err.to_string(),
        }
    }

    /// Wrap a sonic-rs error on `path`, keeping its location.
    #[must_use]
    pub fn json(path: impl Into<PathBuf>, err: &sonic_rs::Error) -> Self {
        Self::InvalidJson {
            path: path.into(),
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// Create an invalid value error.
    #[must_use]
    pub fn invalid_value(
        field: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Check if the manifest was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<ConfigError> for override_files_core::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationFailed { errors, .. } => Self::config(errors.join("; ")),
            other => Self::config(other.to_string()),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
