//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin_to_stdout() {
    cargo_bin_cmd!("cindermark")
        .arg("render")
        .write_stdin("# Heading\n\nParagraph.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>"))
        .stdout(predicate::str::contains("Paragraph."));
}

#[test]
fn test_render_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "# Heading\n\nSome **bold** text.\n").unwrap();

    cargo_bin_cmd!("cindermark")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>\nHeading\n</h1>"))
        .stdout(predicate::str::contains("<strong>bold</strong>"));
}

#[test]
fn test_render_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let out_file = temp_dir.path().join("test.html");
    fs::write(&test_file, "# Heading\n").unwrap();

    cargo_bin_cmd!("cindermark")
        .args([
            "render",
            test_file.to_str().unwrap(),
            "-o",
            out_file.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = fs::read_to_string(&out_file).unwrap();
    assert!(html.contains("<h1>"));
}

#[test]
fn test_render_missing_file() {
    cargo_bin_cmd!("cindermark")
        .args(["render", "does-not-exist.md"])
        .assert()
        .failure();
}

#[test]
fn test_render_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join(".cindermark.toml");
    fs::write(&test_file, "# Heading\n\nParagraph.\n").unwrap();
    fs::write(&config_file, "block_separator = \"blank-line\"\n").unwrap();

    cargo_bin_cmd!("cindermark")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("</h1>\n\n<p>"));
}

#[test]
fn test_render_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&test_file, "# A\n\n# B\n").unwrap();
    fs::write(&config_file, "block_separator = \"blank-line\"\n").unwrap();

    cargo_bin_cmd!("cindermark")
        .args([
            "render",
            test_file.to_str().unwrap(),
            "--config",
            config_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("</h1>\n\n<h1>"));
}

#[test]
fn test_render_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&test_file, "# A\n").unwrap();
    fs::write(&config_file, "block_separator = 3\n").unwrap();

    cargo_bin_cmd!("cindermark")
        .args([
            "render",
            test_file.to_str().unwrap(),
            "--config",
            config_file.to_str().unwrap(),
        ])
        .assert()
        .failure();
}
