//! CLI-level checks for the qbank binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with config lookup pinned to the temp dir so a developer's real
/// config cannot leak into assertions.
fn qbank(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qbank").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home);
    cmd
}

fn write_sample_table(dir: &Path) -> PathBuf {
    let path = dir.join("questions.csv");
    fs::write(
        &path,
        "topic,section,year,content\n\
         A,short,2021,Solve $x^2 = 4$\n\
         B,long,2019,State the theorem\n\
         A,long,2023,Evaluate $$\\int_0^1 2x dx$$\n",
    )
    .unwrap();
    path
}

#[test]
fn list_prints_found_count_and_rows() {
    let dir = TempDir::new().unwrap();
    let table = write_sample_table(dir.path());

    qbank(dir.path())
        .args(["list", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 question(s):"))
        .stdout(predicate::str::contains("2021"));
}

#[test]
fn list_sorts_newest_first_by_default() {
    let dir = TempDir::new().unwrap();
    let table = write_sample_table(dir.path());

    let output = qbank(dir.path())
        .args(["list", "--table"])
        .arg(&table)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let pos_2023 = stdout.find("2023").unwrap();
    let pos_2021 = stdout.find("2021").unwrap();
    let pos_2019 = stdout.find("2019").unwrap();
    assert!(pos_2023 < pos_2021 && pos_2021 < pos_2019);
}

#[test]
fn list_filters_by_topic_and_year_range() {
    let dir = TempDir::new().unwrap();
    let table = write_sample_table(dir.path());

    qbank(dir.path())
        .args(["list", "--table"])
        .arg(&table)
        .args(["--topic", "A", "--from", "2020", "--until", "2022"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 question(s):"))
        .stdout(predicate::str::contains("2021"));
}

#[test]
fn list_with_unmatched_filter_warns() {
    let dir = TempDir::new().unwrap();
    let table = write_sample_table(dir.path());

    qbank(dir.path())
        .args(["list", "--table"])
        .arg(&table)
        .args(["--topic", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No questions matched the current filters.",
        ));
}

#[test]
fn list_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let table = write_sample_table(dir.path());

    let output = qbank(dir.path())
        .args(["list", "--json", "--table"])
        .arg(&table)
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 3);
    assert_eq!(records[0]["body"]["kind"], "text");
}

#[test]
fn show_renders_block_math_on_its_own_lines() {
    let dir = TempDir::new().unwrap();
    let table = write_sample_table(dir.path());

    qbank(dir.path())
        .args(["show", "--table"])
        .arg(&table)
        .args(["--topic", "A", "--section", "long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    \\int_0^1 2x dx"))
        .stdout(predicate::str::contains("Evaluate"));
}

#[test]
fn show_replaces_break_tokens() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("q.csv");
    fs::write(
        &table,
        "topic,section,year,content\nA,short,2020,first line<br>second line\n",
    )
    .unwrap();

    qbank(dir.path())
        .args(["show", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("first line\nsecond line"))
        .stdout(predicate::str::contains("<br>").not());
}

#[test]
fn show_prints_image_and_solution_paths() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("questions");
    let solutions = dir.path().join("solutions");
    fs::create_dir_all(&images).unwrap();
    fs::create_dir_all(&solutions).unwrap();
    fs::write(images.join("A_short_2021_q2.png"), b"img").unwrap();
    fs::write(solutions.join("2021_q2.png"), b"img").unwrap();

    qbank(dir.path())
        .args(["show", "--images"])
        .arg(&images)
        .arg("--solutions")
        .arg(&solutions)
        .assert()
        .success()
        .stdout(predicate::str::contains("A_short_2021_q2.png"))
        .stdout(predicate::str::contains("solution: "))
        .stdout(predicate::str::contains("2021_q2.png"));
}

#[test]
fn missing_table_fails_with_remediation_hint() {
    let dir = TempDir::new().unwrap();

    qbank(dir.path())
        .args(["list", "--table", "/nonexistent/questions.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source not found"));
}

#[test]
fn no_source_fails_with_usage_hint() {
    let dir = TempDir::new().unwrap();

    qbank(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no source given"));
}

#[test]
fn config_path_prints_a_path() {
    let dir = TempDir::new().unwrap();

    qbank(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_then_show_roundtrips() {
    let dir = TempDir::new().unwrap();

    qbank(dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    qbank(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic A"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    qbank(dir.path()).args(["config", "init"]).assert().success();
    qbank(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn completions_emit_a_script() {
    let dir = TempDir::new().unwrap();

    qbank(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qbank"));
}
