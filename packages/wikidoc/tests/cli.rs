//! Tests of the `wikidoc` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn wikidoc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wikidoc"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_outline_prints_sections() {
    wikidoc()
        .arg("outline")
        .arg(fixture("release-guide.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("release-guide"))
        .stdout(predicate::str::contains("Preparation"))
        .stdout(predicate::str::contains("#owners"));
}

#[test]
fn test_outline_yaml() {
    wikidoc()
        .args(["outline", "--yaml", "--title", "Guide"])
        .arg(fixture("release-guide.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Preparation"))
        .stdout(predicate::str::contains("- Deployment"));
}

#[test]
fn test_toc_range() {
    wikidoc()
        .args(["toc", "--min", "1", "--max", "2"])
        .arg(fixture("release-guide.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Checklist"))
        .stdout(predicate::str::contains("Owners").not());
}

#[test]
fn test_toc_rejects_inverted_range() {
    wikidoc()
        .args(["toc", "--min", "3", "--max", "1"])
        .arg(fixture("release-guide.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Invalid heading level range"));
}

#[test]
fn test_search() {
    wikidoc()
        .args(["search", "--whole-word", "--kind", "list-item"])
        .arg(fixture("release-guide.xml"))
        .arg("release")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 matches in 2 elements"))
        .stdout(predicate::str::contains("Preparation > Checklist"));
}

#[test]
fn test_search_without_matches() {
    wikidoc()
        .arg("search")
        .arg(fixture("release-guide.xml"))
        .arg("kubernetes")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches for 'kubernetes'"));
}

#[test]
fn test_text_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("notes.xml");
    fs::write(&page, "<h1>Notes</h1><p>Short and sweet.</p>").unwrap();

    wikidoc()
        .arg("text")
        .arg(&page)
        .assert()
        .success()
        .stdout("Notes\nShort and sweet.\n");

    wikidoc()
        .args(["summary", "--max-length", "5"])
        .arg(&page)
        .assert()
        .success()
        .stdout("Short...\n");
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    wikidoc()
        .arg("outline")
        .arg(dir.path().join("absent.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: IO error"));
}

#[test]
fn test_malformed_markup_fails() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("broken.xml");
    fs::write(&page, "<p>never closed").unwrap();

    wikidoc()
        .arg("text")
        .arg(&page)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be tokenized"));
}
