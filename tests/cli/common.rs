//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("cindermark")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cindermark is a CLI converter"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("cindermark")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("cindermark")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("cindermark")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_render_help() {
    cargo_bin_cmd!("cindermark")
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a Markdown document"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("cindermark")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse a Markdown document"));
}
