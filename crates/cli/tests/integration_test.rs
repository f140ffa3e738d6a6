//! End-to-end tests for the `dirwalk` binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn dirwalk() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dirwalk"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn scenario_tree(root: &Path) {
    fs::write(root.join("x.png"), b"png").unwrap();
    fs::create_dir(root.join("sub1")).unwrap();
    fs::create_dir(root.join("sub2")).unwrap();
    fs::write(root.join("sub2/y.jpg"), b"jpg").unwrap();
}

#[test]
fn shows_help() {
    dirwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-count"));
}

#[test]
fn prints_progress_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    scenario_tree(dir.path());
    let sub1 = dir.path().join("sub1");

    dirwalk()
        .arg(dir.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("+ Found directory:"))
        .stdout(predicate::str::contains("  - Found file:"))
        .stdout(predicate::str::contains(format!("  -- No files in {} --", sub1.display())))
        .stdout(predicate::str::contains(format!(
            "There are 2 files and 2 subdirectories in {}.",
            dir.path().display()
        )))
        .stdout(predicate::str::contains("2 filetypes:"))
        .stdout(predicate::str::contains(".png"))
        .stdout(predicate::str::contains(".jpg"))
        .stdout(predicate::str::contains(format!("1 empty directories:\n {}", sub1.display())));
}

#[test]
fn quiet_suppresses_progress_lines() {
    let dir = tempfile::tempdir().unwrap();
    scenario_tree(dir.path());

    dirwalk()
        .arg(dir.path())
        .args(["--quiet", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found").not())
        .stdout(predicate::str::contains("There are 2 files"));
}

#[test]
fn json_summary() {
    let dir = tempfile::tempdir().unwrap();
    scenario_tree(dir.path());

    let assert = dirwalk().arg(dir.path()).args(["--format", "json"]).assert().success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).expect("stdout is JSON");

    assert_eq!(json["files"], 2);
    assert_eq!(json["subdirectories"], 2);
    assert_eq!(json["extension_count"], 2);
    assert_eq!(json["empty_directories"].as_array().unwrap().len(), 1);
    let mut exts: Vec<_> = json["extensions"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    exts.sort_unstable();
    assert_eq!(exts, vec![".jpg", ".png"]);
}

#[test]
fn cap_exceeded_prints_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();

    dirwalk()
        .arg(dir.path())
        .args(["--max-count", "2", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max depth of 2 exceeded. Find a smaller start point."))
        .stdout(predicate::str::contains("There are").not())
        .stderr(predicate::str::contains("WARN").not())
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn missing_root_argument_is_rejected() {
    dirwalk()
        .arg("--no-color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("You must set the start directory first."));
}

#[test]
fn nonexistent_root_fails_with_detail() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    dirwalk()
        .arg(&missing)
        .arg("--no-color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"))
        .stderr(predicate::str::contains("read_dir"))
        .stderr(predicate::str::contains("\x1b[").not());
}
