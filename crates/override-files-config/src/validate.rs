//! Validation of the `extra.override_files` section.

use crate::EXTRA_KEY;
use crate::error::{ConfigError, Result};
use crate::types::OverrideFilesConfig;
use override_files_core::paths;
use sonic_rs::{JsonContainerTrait, JsonValueTrait, Value};
use std::path::Path;

/// Keys understood inside the section.
const KNOWN_KEYS: [&str; 3] = ["path", "base_vendor_dir", "generate_origin_file"];

/// Validation severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning (may indicate issues).
    Warning,
    /// Error (must be fixed).
    Error,
}

/// Validation issue.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity level.
    pub severity: Severity,
    /// Issue code for programmatic handling.
    pub code: &'static str,
    /// Field path (dot-notation).
    pub field: String,
    /// Human-readable message.
    pub message: String,
    /// Suggested fix.
    pub hint: Option<String>,
}

impl ValidationIssue {
    /// Create a new error.
    #[must_use]
    pub fn error(code: &'static str, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, field, message)
    }

    /// Create a new warning.
    #[must_use]
    pub fn warning(
        code: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, code, field, message)
    }

    fn new(
        severity: Severity,
        code: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Add a hint to the issue.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Validation result containing all issues.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// All validation issues.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Check if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Get error count.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Get warning count.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// Convert to result, failing if there are errors.
    ///
    /// # Errors
    /// Returns error if validation has errors.
    pub fn into_result(self) -> Result<()> {
        if self.has_errors() {
            let errors: Vec<String> = self
                .issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .map(|i| i.message.clone())
                .collect();
            Err(ConfigError::ValidationFailed {
                count: errors.len(),
                errors,
            })
        } else {
            Ok(())
        }
    }
}

/// Check an `override_files` section against the project layout.
///
/// Every problem is reported; nothing is short-circuited so a `validate` run
/// shows the whole picture at once.
#[must_use]
pub fn validate_override_config(section: &Value, root: &Path, vendor_dir: &Path) -> ValidationResult {
    let mut result = ValidationResult::new();

    if !section.is_object() {
        result.add(
            ValidationIssue::error(
                "invalid_type",
                EXTRA_KEY,
                format!(
                    "Override files configuration must be an object, got {}",
                    type_name(section)
                ),
            )
            .with_hint(r#"use "override_files": {"path": "overrides"}"#),
        );
        return result;
    }

    validate_path(section.get("path"), root, &mut result);
    validate_base_vendor_dir(section.get("base_vendor_dir"), vendor_dir, &mut result);

    if let Some(flag) = section.get("generate_origin_file")
        && !flag.is_boolean()
    {
        result.add(
            ValidationIssue::error(
                "invalid_type",
                field("generate_origin_file"),
                format!(
                    "Override file option generate_origin_file must be a boolean, got {}",
                    type_name(flag)
                ),
            )
            .with_hint("use true or false"),
        );
    }

    if let Some(object) = section.as_object() {
        for (key, _) in object.iter() {
            if !KNOWN_KEYS.contains(&key) {
                result.add(
                    ValidationIssue::warning(
                        "unknown_key",
                        field(key),
                        format!("Unknown override files option '{key}' is ignored"),
                    )
                    .with_hint(format!("known options: {}", KNOWN_KEYS.join(", "))),
                );
            }
        }
    }

    result
}

fn validate_path(value: Option<&Value>, root: &Path, result: &mut ValidationResult) {
    let Some(value) = value else {
        result.add(
            ValidationIssue::error(
                "missing_field",
                field("path"),
                "Override file directory cannot be empty",
            )
            .with_hint("set \"path\" to a directory relative to the project root"),
        );
        return;
    };
    let Some(path) = value.as_str() else {
        result.add(ValidationIssue::error(
            "invalid_type",
            field("path"),
            format!(
                "Override file directory must be a string, got {}",
                type_name(value)
            ),
        ));
        return;
    };
    if path.trim().is_empty() {
        result.add(ValidationIssue::error(
            "empty_value",
            field("path"),
            "Override file directory cannot be empty",
        ));
        return;
    }
    if !paths::join(root, [path]).is_dir() {
        result.add(
            ValidationIssue::error(
                "invalid_path",
                field("path"),
                format!("Override file directory ({path}) doesn't exist"),
            )
            .with_hint("create the directory or fix the path"),
        );
    }
}

fn validate_base_vendor_dir(value: Option<&Value>, vendor_dir: &Path, result: &mut ValidationResult) {
    let Some(value) = value else {
        return;
    };
    if value.is_null() {
        return;
    }
    let Some(base) = value.as_str() else {
        result.add(ValidationIssue::error(
            "invalid_type",
            field("base_vendor_dir"),
            format!(
                "Override file base directory must be a string, got {}",
                type_name(value)
            ),
        ));
        return;
    };
    if !paths::join(vendor_dir, [base]).is_dir() {
        result.add(
            ValidationIssue::error(
                "invalid_path",
                field("base_vendor_dir"),
                format!("Override file base directory ({base}) doesn't exist"),
            )
            .with_hint("the directory is resolved inside the vendor directory"),
        );
    }
}

impl OverrideFilesConfig {
    /// Validate a section and build the configuration from it.
    ///
    /// Warnings are returned alongside the configuration.
    ///
    /// # Errors
    /// Returns `ValidationFailed` if the section has any error.
    pub fn from_section(
        section: &Value,
        root: &Path,
        vendor_dir: &Path,
    ) -> Result<(Self, Vec<ValidationIssue>)> {
        let result = validate_override_config(section, root, vendor_dir);
        let warnings: Vec<ValidationIssue> = result.warnings().cloned().collect();
        result.into_result()?;

        let path = section
            .get("path")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(ConfigError::MissingField {
                field: field("path"),
            })?;
        let base_vendor_dir = section
            .get("base_vendor_dir")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let generate_origin_file = section
            .get("generate_origin_file")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Ok((
            Self {
                path,
                base_vendor_dir,
                generate_origin_file,
            },
            warnings,
        ))
    }
}

fn field(name: &str) -> String {
    format!("extra.{EXTRA_KEY}.{name}")
}

fn type_name(value: &Value) -> &'static str {
    if value.is_null() {
        "null"
    } else if value.is_boolean() {
        "boolean"
    } else if value.is_number() {
        "number"
    } else if value.is_str() {
        "string"
    } else if value.is_array() {
        "array"
    } else {
        "object"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    struct Layout {
        dir: TempDir,
    }

    impl Layout {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            std::fs::create_dir_all(dir.path().join("overrides")).unwrap();
            std::fs::create_dir_all(dir.path().join("vendor/acme/lib/src")).unwrap();
            Self { dir }
        }

        fn root(&self) -> &Path {
            self.dir.path()
        }

        fn vendor(&self) -> std::path::PathBuf {
            self.dir.path().join("vendor")
        }

        fn check(&self, json: &str) -> ValidationResult {
            let section: Value = sonic_rs::from_str(json).unwrap();
            validate_override_config(&section, self.root(), &self.vendor())
        }
    }

    #[test]
    fn minimal_section_is_valid() {
        let layout = Layout::new();
        let section: Value = sonic_rs::from_str(r#"{"path": "overrides"}"#).unwrap();
        let (config, warnings) =
            OverrideFilesConfig::from_section(&section, layout.root(), &layout.vendor()).unwrap();
        assert_eq!(config.path, "overrides");
        assert_eq!(config.base_vendor_dir, None);
        assert!(!config.generate_origin_file);
        assert!(warnings.is_empty());
    }

    #[test]
    fn full_section_is_valid() {
        let layout = Layout::new();
        let section: Value = sonic_rs::from_str(
            r#"{"path": "overrides", "base_vendor_dir": "acme/lib/src", "generate_origin_file": true}"#,
        )
        .unwrap();
        let (config, _) =
            OverrideFilesConfig::from_section(&section, layout.root(), &layout.vendor()).unwrap();
        assert_eq!(config.base_vendor_dir.as_deref(), Some("acme/lib/src"));
        assert!(config.generate_origin_file);
    }

    #[rstest]
    #[case(r#"{}"#, "cannot be empty")]
    #[case(r#"{"path": ""}"#, "cannot be empty")]
    #[case(r#"{"path": 42}"#, "must be a string, got number")]
    #[case(r#"{"path": "missing"}"#, "Override file directory (missing) doesn't exist")]
    #[case(r#"{"path": "overrides", "base_vendor_dir": "nope"}"#, "Override file base directory (nope) doesn't exist")]
    #[case(r#"{"path": "overrides", "base_vendor_dir": ["acme"]}"#, "must be a string, got array")]
    #[case(r#"{"path": "overrides", "generate_origin_file": "yes"}"#, "must be a boolean, got string")]
    #[case(r#""overrides""#, "must be an object, got string")]
    fn invalid_sections_are_rejected(#[case] json: &str, #[case] expected: &str) {
        let layout = Layout::new();
        let result = layout.check(json);
        assert!(result.has_errors());
        assert!(
            result.issues.iter().any(|i| i.message.contains(expected)),
            "no issue containing {expected:?} in {:?}",
            result.issues
        );
    }

    #[test]
    fn all_errors_are_collected() {
        let layout = Layout::new();
        let result = layout.check(
            r#"{"path": "missing", "base_vendor_dir": "nope", "generate_origin_file": 1}"#,
        );
        assert_eq!(result.error_count(), 3);
    }

    #[test]
    fn unknown_keys_warn() {
        let layout = Layout::new();
        let result = layout.check(r#"{"path": "overrides", "generate_origin": true}"#);
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.code, "unknown_key");
        assert_eq!(issue.field, "extra.override_files.generate_origin");
    }

    #[test]
    fn errors_fail_conversion() {
        let layout = Layout::new();
        let section: Value = sonic_rs::from_str(r#"{"path": "missing"}"#).unwrap();
        let err = OverrideFilesConfig::from_section(&section, layout.root(), &layout.vendor())
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { count: 1, .. }));
        assert!(err.to_string().contains("doesn't exist"));
    }
}
