//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("cindermark")
        .arg("parse")
        .write_stdin("# Heading\n\nParagraph.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Heading"))
        .stdout(predicate::str::contains("Paragraph"));
}

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "> quoted\n").unwrap();

    cargo_bin_cmd!("cindermark")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote"))
        .stdout(predicate::str::contains("quoted"));
}

#[test]
fn test_parse_shows_inline_nodes() {
    cargo_bin_cmd!("cindermark")
        .arg("parse")
        .write_stdin("Some **bold** text.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bold"))
        .stdout(predicate::str::contains("PlainText"));
}
