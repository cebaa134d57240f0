//! CLI integration tests using the REAL featurepack binary

mod common;

use predicates::prelude::*;

use common::featurepack_cmd;

#[test]
fn test_help_output() {
    featurepack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("package"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_generate_help_lists_switches() {
    featurepack_cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-children"))
        .stdout(predicate::str::contains("--max-depth"))
        .stdout(predicate::str::contains("--manifest"));
}

#[test]
fn test_version_output() {
    featurepack_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("featurepack"));
}

#[test]
fn test_missing_subcommand_fails() {
    featurepack_cmd().assert().failure();
}

#[test]
fn test_completions_bash() {
    featurepack_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("featurepack"));
}

#[test]
fn test_completions_unknown_shell() {
    featurepack_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_config_argument() {
    featurepack_cmd()
        .args(["generate", "--config", "linux,gtk", "feature@a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 axes"));
}
