//! CLI User Validation Tests
//!
//! These tests run the gitinclude binary the way a user would and check the
//! files it writes, its output, and its error handling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const EXAMPLE_RULES: &str = "/test/test1/test2/[*.txt, *.cpp]\n/test/[*.txt]\n\n/[*.cpp]\n";

const EXAMPLE_IGNORE: &str = "*
!/test/
/test/*
!/test/test1/
/test/test1/*
!/test/test1/test2/
/test/test1/test2/*
!/test/test1/test2/*.txt
!/test/test1/test2/*.cpp
!/test/*.txt
!/*.cpp
";

fn gitinclude(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitinclude").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_writes_default_gitignore() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.rules"), EXAMPLE_RULES).unwrap();

    gitinclude(&temp_dir)
        .arg("keep.rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 11 patterns"))
        .stdout(predicate::str::contains(".gitignore"));

    let written = fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap();
    assert_eq!(written, EXAMPLE_IGNORE);
}

#[test]
fn test_writes_named_output_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.rules"), EXAMPLE_RULES).unwrap();

    gitinclude(&temp_dir)
        .args(["keep.rules", "custom.ignore"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("custom.ignore")).unwrap(),
        EXAMPLE_IGNORE
    );
    assert!(!temp_dir.path().join(".gitignore").exists());
}

#[test]
fn test_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.rules"), "\n  \n").unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "target/\n*.log\n").unwrap();

    gitinclude(&temp_dir).arg("keep.rules").assert().success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap(),
        "*\n"
    );
}

#[test]
fn test_no_arguments_prints_usage() {
    let temp_dir = TempDir::new().unwrap();

    gitinclude(&temp_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_too_many_arguments_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    gitinclude(&temp_dir)
        .args(["a.rules", "out.ignore", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    assert!(!temp_dir.path().join("out.ignore").exists());
}

#[test]
fn test_missing_rules_file() {
    let temp_dir = TempDir::new().unwrap();

    gitinclude(&temp_dir)
        .arg("missing.rules")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open input"))
        .stderr(predicate::str::contains("missing.rules"));
}

#[test]
fn test_malformed_line_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("keep.rules"),
        "/src/[*.rs]\n/docs/*.md\n",
    )
    .unwrap();

    gitinclude(&temp_dir)
        .arg("keep.rules")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed rule line 2"))
        .stderr(predicate::str::contains("/docs/*.md"));

    assert!(!temp_dir.path().join(".gitignore").exists());
}

#[test]
fn test_malformed_line_keeps_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.rules"), "/src/[*.rs\n").unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "target/\n").unwrap();

    gitinclude(&temp_dir).arg("keep.rules").assert().failure();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap(),
        "target/\n"
    );
}

#[test]
fn test_unwritable_output_path() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.rules"), "/src/[*.rs]\n").unwrap();

    gitinclude(&temp_dir)
        .args(["keep.rules", "no/such/dir/.gitignore"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot write output"));
}

#[test]
fn test_version_flag() {
    let temp_dir = TempDir::new().unwrap();

    gitinclude(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
