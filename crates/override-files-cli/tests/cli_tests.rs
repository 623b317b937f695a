//! CLI integration tests for override-files.
//!
//! These tests run the binary against temporary Composer projects and check
//! exit codes, output and what ends up on disk.

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use override_files_test_utils::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::process::Command;

const LOGGER: &str = "vendor/monolog/monolog/src/Monolog/Logger.php";
const ORIGIN_LOGGER: &str = "vendor/monolog/monolog/src/Monolog/OriginLogger.php";

/// Get the override-files binary command for `project`.
fn override_files(project: &TempProject) -> Command {
    let mut cmd = Command::new(cargo_bin!("override-files"));
    cmd.arg("--working-dir")
        .arg(project.path())
        .env_remove("COMPOSER")
        .env_remove("COMPOSER_VENDOR_DIR")
        .env("NO_COLOR", "1");
    cmd
}

fn monolog_project(generate_origin: bool) -> TempProject {
    let mut composer = Fixtures::override_composer_json("overrides", generate_origin);
    composer["extra"]["override_files"]["base_vendor_dir"] = json!("monolog/monolog/src");
    TempProject::new()
        .with_composer_json(composer)
        .with_vendor_file("monolog/monolog/src/Monolog/Logger.php", Fixtures::monolog_logger())
        .with_override_file(
            "overrides/Monolog/Logger.php",
            Fixtures::php_override_class("Monolog", "Logger"),
        )
        .build()
        .unwrap()
}

// ========== Help and Version Tests ==========

#[test]
fn test_help_output() {
    Command::new(cargo_bin!("override-files"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dump-autoload"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version_output() {
    Command::new(cargo_bin!("override-files"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("override-files"));
}

// ========== dump-autoload Tests ==========

#[test]
fn test_no_configuration_is_a_no_op() {
    let project = TempProject::new().with_vendor().build().unwrap();
    let before = project.read_composer_json_bytes().unwrap();

    override_files(&project)
        .args(["dump-autoload", "--write"])
        .assert()
        .success();

    assert_eq!(project.read_composer_json_bytes().unwrap(), before);
}

#[test]
fn test_plain_override_prints_autoload() {
    let project = monolog_project(false);
    let before = project.read_composer_json_bytes().unwrap();

    override_files(&project)
        .arg("dump-autoload")
        .assert()
        .success()
        .stdout(predicate::str::contains("exclude-from-classmap"))
        .stdout(predicate::str::contains(LOGGER))
        .stderr(predicate::str::contains(format!(
            "Overrode file: {LOGGER} => overrides/Monolog/Logger.php"
        )));

    // Without --write the manifest stays as it was.
    assert_eq!(project.read_composer_json_bytes().unwrap(), before);
}

#[test]
fn test_plain_override_writes_manifest() {
    let project = monolog_project(false);

    override_files(&project)
        .args(["dump-autoload", "--write"])
        .assert()
        .success();

    let composer = project.read_composer_json().unwrap();
    assert_eq!(composer["autoload"]["exclude-from-classmap"], json!([LOGGER]));
    assert_eq!(composer["autoload"]["psr-4"]["Monolog\\"], json!("overrides/Monolog"));
    assert_eq!(composer["autoload"]["psr-4"]["App\\"], json!("src/"));
    assert_eq!(composer["name"], json!("test/project"));
    assert_eq!(composer["require"]["monolog/monolog"], json!("^2.0"));
    assert!(!project.file_exists(ORIGIN_LOGGER));
}

#[test]
fn test_origin_delegation_writes_origin_file() {
    let project = monolog_project(true);

    override_files(&project)
        .args(["dump-autoload", "--write", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Generated origin file"));

    let origin = project.read_file(ORIGIN_LOGGER).unwrap();
    assert!(origin.contains("class OriginLogger implements LoggerInterface"));
    assert!(!origin.contains("class Logger "));

    let composer = project.read_composer_json().unwrap();
    assert_eq!(composer["autoload"]["files"], json!([ORIGIN_LOGGER]));
    assert_eq!(composer["autoload"]["exclude-from-classmap"], json!([LOGGER]));
}

#[test]
fn test_repeated_runs_are_stable() {
    let project = monolog_project(true);

    for _ in 0..2 {
        override_files(&project)
            .args(["dump-autoload", "--write"])
            .assert()
            .success();
    }

    let composer = project.read_composer_json().unwrap();
    assert_eq!(composer["autoload"]["files"], json!([ORIGIN_LOGGER]));
    assert_eq!(composer["autoload"]["exclude-from-classmap"], json!([LOGGER]));
}

#[test]
fn test_manifest_with_plugin_config_is_rewritten() {
    let project = monolog_project(false);
    let mut composer = project.read_composer_json().unwrap();
    composer["config"] = json!({
        "allow-plugins": {"acme/override-files": true},
        "sort-packages": true
    });
    composer["autoload"]["x-custom"] = json!({"keep": true});
    project.write_composer_json(&composer).unwrap();

    override_files(&project)
        .args(["dump-autoload", "--write"])
        .assert()
        .success();

    let written = project.read_composer_json().unwrap();
    assert_eq!(written["autoload"]["exclude-from-classmap"], json!([LOGGER]));
    assert_eq!(written["autoload"]["x-custom"], json!({"keep": true}));
    assert_eq!(written["config"]["allow-plugins"]["acme/override-files"], json!(true));
    assert_eq!(written["config"]["sort-packages"], json!(true));

    let text = String::from_utf8(project.read_composer_json_bytes().unwrap()).unwrap();
    assert!(text.starts_with("{\n    \"autoload\": {\n        \"psr-4\": {\n"));
}

#[test]
fn test_no_configuration_with_plugin_config_is_a_no_op() {
    let mut composer = Fixtures::plain_composer_json();
    composer["config"] = json!({
        "allow-plugins": {"acme/override-files": true},
        "sort-packages": true
    });
    let project = TempProject::new()
        .with_composer_json(composer)
        .with_vendor()
        .build()
        .unwrap();
    let before = project.read_composer_json_bytes().unwrap();

    override_files(&project)
        .args(["dump-autoload", "--write"])
        .assert()
        .success();

    assert_eq!(project.read_composer_json_bytes().unwrap(), before);
}

#[test]
fn test_origin_file_keeps_non_utf8_vendor_bytes() {
    let project = monolog_project(true);
    let mut vendor = project.read_file(LOGGER).unwrap().into_bytes();
    vendor.extend_from_slice(b"// caf\xe9\n");
    std::fs::write(project.path().join(LOGGER), &vendor).unwrap();

    override_files(&project)
        .args(["dump-autoload", "--write"])
        .assert()
        .success();

    let origin = std::fs::read(project.path().join(ORIGIN_LOGGER)).unwrap();
    assert!(origin.ends_with(b"// caf\xe9\n"));
    assert!(origin.windows(18).any(|w| w == b"class OriginLogger"));
}

#[test]
fn test_missing_vendor_file_fails_without_changes() {
    let project = TempProject::new()
        .with_composer_json(Fixtures::override_composer_json("overrides", false))
        .with_vendor_file("acme/lib/src/Foo.php", Fixtures::php_class("Acme\\Lib", "Foo"))
        .with_override_file("overrides/acme/lib/src/Bar.php", "<?php\n")
        .build()
        .unwrap();
    let before = project.read_composer_json_bytes().unwrap();

    override_files(&project)
        .args(["dump-autoload", "--write"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file doesn't exist"))
        .stderr(predicate::str::contains(
            "Plugin override-files failed during pre-autoload-dump",
        ));

    assert_eq!(project.read_composer_json_bytes().unwrap(), before);
}

#[test]
fn test_quiet_hides_override_lines() {
    let project = monolog_project(false);

    override_files(&project)
        .args(["dump-autoload", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Overrode file").not());
}

#[test]
fn test_missing_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::new(cargo_bin!("override-files"))
        .arg("--working-dir")
        .arg(dir.path())
        .env_remove("COMPOSER")
        .arg("dump-autoload")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("composer.json"));
}

// ========== list Tests ==========

#[test]
fn test_list_shows_entries_without_writing() {
    let project = monolog_project(true);
    let before = project.read_composer_json_bytes().unwrap();

    override_files(&project)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(LOGGER))
        .stdout(predicate::str::contains("overrides/Monolog/Logger.php"))
        .stdout(predicate::str::contains("Monolog"))
        .stdout(predicate::str::contains("Logger"));

    assert!(!project.file_exists(ORIGIN_LOGGER));
    assert_eq!(project.read_composer_json_bytes().unwrap(), before);
}

#[test]
fn test_list_json_format() {
    let project = monolog_project(false);

    let output = override_files(&project)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().map(Vec::len), Some(1));
    assert_eq!(records[0]["namespace"], json!("Monolog"));
    assert_eq!(records[0]["vendor_file"], json!(LOGGER));
}

// ========== validate Tests ==========

#[test]
fn test_validate_accepts_valid_section() {
    let project = monolog_project(false);

    override_files(&project)
        .arg("validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("override_files is valid"));
}

#[test]
fn test_validate_reports_every_error() {
    let mut composer = Fixtures::override_composer_json("missing", false);
    composer["extra"]["override_files"]["base_vendor_dir"] = json!("nowhere");
    composer["extra"]["override_files"]["generate_origin_file"] = json!("yes");
    let project = TempProject::new()
        .with_composer_json(composer)
        .with_vendor()
        .build()
        .unwrap();

    override_files(&project)
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Override file directory (missing) doesn't exist"))
        .stderr(predicate::str::contains("Override file base directory"))
        .stderr(predicate::str::contains("generate_origin_file"));
}

#[test]
fn test_validate_without_section() {
    let project = TempProject::new().build().unwrap();

    override_files(&project)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("No override_files configuration found"));
}
