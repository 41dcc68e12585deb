// Integration tests for the scorecard CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the scorecard binary.
fn scorecard() -> Command {
    Command::cargo_bin("scorecard").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    scorecard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scorecard"));
}

#[test]
fn cli_help_flag() {
    scorecard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weighted target-achievement"));
}

#[test]
fn score_requires_path() {
    scorecard()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn trend_requires_path() {
    scorecard()
        .arg("trend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_missing_path_exits_with_runtime_failure() {
    scorecard()
        .args(["score", "/nonexistent/scorecard-data"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    scorecard()
        .args(["score", ".", "--quiet", "-v"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
