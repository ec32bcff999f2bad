//! Integration tests for bumpcheck CLI
//!
//! These tests run the binary against changed-file JSON documents the way
//! a webhook handler would: one file, author and title per invocation.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a bumpcheck command
fn bumpcheck() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("bumpcheck"))
}

const TITLE: &str =
    "chore(deps): update dependency com.google.cloud:google-cloud-datacatalog to v1.4.2";

const BUMP_PATCH: &str = "@@ -30,7 +30,7 @@\n     <dependency>\n       <groupId>com.google.cloud</groupId>\n       <artifactId>google-cloud-datacatalog</artifactId>\n-      <version>1.4.1</version>\n+      <version>1.4.2</version>\n     </dependency>";

/// Write a changed-file JSON document as GitHub returns it
fn write_changed_file(dir: &Path, filename: &str, patch: &str) -> PathBuf {
    let path = dir.join("file.json");
    let json = serde_json::json!({
        "sha": "bbcd538c8e72b8c175046e27cc8f907076331401",
        "filename": filename,
        "status": "modified",
        "patch": patch,
    });
    fs::write(&path, json.to_string()).unwrap();
    path
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

#[test]
fn test_check_approves_valid_bump() {
    let temp = TempDir::new().unwrap();
    let file = write_changed_file(temp.path(), "pom.xml", BUMP_PATCH);

    bumpcheck()
        .args(["check", "--author", "renovate-bot", "--title", TITLE])
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("APPROVED"))
        .stdout(predicate::str::contains("1.4.1 -> 1.4.2"));
}

#[test]
fn test_check_rejects_mismatched_title() {
    let temp = TempDir::new().unwrap();
    let file = write_changed_file(temp.path(), "pom.xml", BUMP_PATCH);

    bumpcheck()
        .args([
            "check",
            "--author",
            "renovate-bot",
            "--title",
            "chore(deps): update dependency com.google.cloud:google-cloud-datacatalog to v1.5.0",
        ])
        .arg("--file")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("NOT APPROVED"));
}

#[test]
fn test_check_reports_unmatched_file() {
    let temp = TempDir::new().unwrap();
    let file = write_changed_file(temp.path(), "build.gradle", BUMP_PATCH);

    bumpcheck()
        .args(["check", "--author", "renovate-bot", "--title", TITLE])
        .arg("--file")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No permitted-file rule applies"));
}

#[test]
fn test_check_json_output() {
    let temp = TempDir::new().unwrap();
    let file = write_changed_file(temp.path(), "pom.xml", BUMP_PATCH);

    let output = bumpcheck()
        .args(["--json", "check", "--author", "renovate-bot", "--title", TITLE])
        .arg("--file")
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["approved"], true);
    assert_eq!(report["rule"], "**/pom.xml");
    assert_eq!(report["versions"]["new_dependency"], "com.google.cloud:google-cloud-datacatalog");
    assert_eq!(report["versions"]["new_version"], "1.4.2");
}

#[test]
fn test_check_logs_each_check_to_stderr() {
    let temp = TempDir::new().unwrap();
    let file = write_changed_file(temp.path(), "pom.xml", BUMP_PATCH);

    bumpcheck()
        .args(["check", "--author", "renovate-bot", "--title", TITLE])
        .arg("--file")
        .arg(&file)
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("Versions upgraded correctly"))
        .stderr(predicate::str::contains("One dependency changed"))
        .stderr(predicate::str::contains("Does dependency match title"));
}

#[test]
fn test_check_missing_file_is_error() {
    let temp = TempDir::new().unwrap();

    bumpcheck()
        .args(["check", "--author", "renovate-bot", "--title", TITLE])
        .arg("--file")
        .arg(temp.path().join("absent.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_check_with_custom_rules() {
    let temp = TempDir::new().unwrap();
    let file = write_changed_file(temp.path(), "pom.xml", BUMP_PATCH);

    // Export the built-in table, then swap the author
    let exported = bumpcheck().args(["rules", "--toml"]).output().unwrap();
    assert!(exported.status.success());
    let table = String::from_utf8(exported.stdout)
        .unwrap()
        .replace("pr_author = \"renovate-bot\"", "pr_author = \"my-bot\"");
    let rules = temp.path().join("bumpcheck.toml");
    fs::write(&rules, table).unwrap();

    bumpcheck()
        .args(["check", "--author", "my-bot", "--title", TITLE])
        .arg("--file")
        .arg(&file)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success();

    bumpcheck()
        .args(["check", "--author", "renovate-bot", "--title", TITLE])
        .arg("--file")
        .arg(&file)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .code(1);
}

// =============================================================================
// RULES AND VERSION COMMANDS
// =============================================================================

#[test]
fn test_rules_lists_builtin_table() {
    bumpcheck()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("**/pom.xml"))
        .stdout(predicate::str::contains("renovate-bot"));
}

#[test]
fn test_rules_rejects_broken_table() {
    let temp = TempDir::new().unwrap();
    let rules = temp.path().join("bumpcheck.toml");
    fs::write(
        &rules,
        "[[rule]]\npr_author = \"a\"\ntarget_file = \"[\"\ntitle = \"t\"\nold_version = \"o\"\nnew_version = \"n\"\n",
    )
    .unwrap();

    bumpcheck()
        .arg("rules")
        .arg("--rules")
        .arg(&rules)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid target_file pattern"));
}

#[test]
fn test_version_json() {
    bumpcheck()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
