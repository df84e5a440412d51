use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn dep_cleaner_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin("dep-cleaner"))
}

#[test]
fn cleans_with_positional_paths() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("prelim_req.txt");
    let output = temp.path().join("req.txt");
    fs::write(&input, "- numpy==1.2.0\n  - pandas\nscipy\n").unwrap();

    dep_cleaner_cmd()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependencies cleaned and saved to"))
        .stdout(predicate::str::contains(output.to_str().unwrap()));

    assert_eq!(fs::read_to_string(&output).unwrap(), "numpy==1.2.0\npandas\nscipy");
}

#[test]
fn cleans_with_inline_config() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    fs::write(&input, "---   requests").unwrap();
    let config = serde_json::json!({ "input_path": input, "output_path": output }).to_string();

    dep_cleaner_cmd()
        .args(["--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependencies cleaned and saved to"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "requests");
}

#[test]
fn prefix_flag_strips_only_literal_bullet() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    fs::write(&input, "- a\n--- b").unwrap();

    dep_cleaner_cmd()
        .arg(&input)
        .arg(&output)
        .args(["--prefix", "- "])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a\n--- b");
}

#[test]
fn prefix_flag_accepts_dash_only_value() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    fs::write(&input, "-- a\n- b").unwrap();

    dep_cleaner_cmd()
        .arg(&input)
        .arg(&output)
        .args(["--prefix", "-- "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependencies cleaned and saved to"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "a\n- b");
}

#[test]
fn missing_input_fails_without_touching_output() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.txt");

    dep_cleaner_cmd()
        .arg(temp.path().join("missing.txt"))
        .arg(&output)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot read input file"));

    assert!(!output.exists());
}

#[test]
fn requires_paths_or_config() {
    dep_cleaner_cmd().assert().failure();
}
