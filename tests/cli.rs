//! End-to-end tests for the nsv binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nsv_cmd() -> Command {
    Command::cargo_bin("nsv").unwrap()
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// header (name, description) + three rows, one with an escaped newline,
// one with an empty cell, one with a backslash
const PEOPLE_NSV: &str = "name\ndescription\n\n\
                          Alice\nfirst\\nsecond\n\n\
                          Bob\n\\\n\n\
                          Carol\nC:\\\\temp\n\n";

#[test]
fn test_terminal_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "people.nsv", PEOPLE_NSV);

    nsv_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 rows × 2 columns"))
        .stdout(predicate::str::contains("Alice"))
        // embedded newline rendered in escaped spelling
        .stdout(predicate::str::contains("first\\nsecond"));
}

#[test]
fn test_stats_only() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "people.nsv", PEOPLE_NSV);

    nsv_cmd()
        .arg(&input)
        .arg("--stats-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows:    3"))
        .stdout(predicate::str::contains("Columns: 2"))
        .stdout(predicate::str::contains("[1] description"));
}

#[test]
fn test_json_output_decodes_escapes() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "people.nsv", PEOPLE_NSV);

    let output = nsv_cmd()
        .arg(&input)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["description"], "first\nsecond");
    assert_eq!(records[1]["description"], "");
    assert_eq!(records[2]["description"], "C:\\temp");
}

#[test]
fn test_csv_to_nsv_conversion() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "people.csv", "name,age\nAlice,30\nBob,25\n");
    let output = dir.path().join("people.nsv");

    nsv_cmd()
        .arg(&input)
        .args(["--format", "nsv"])
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "name\nage\n\nAlice\n30\n\nBob\n25\n\n");
}

#[test]
fn test_nsv_to_csv_conversion() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "people.nsv", PEOPLE_NSV);

    nsv_cmd()
        .arg(&input)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,description\n"))
        // decoded newline forces CSV quoting
        .stdout(predicate::str::contains("\"first\nsecond\""));
}

#[test]
fn test_round_trip_through_nsv() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "people.nsv", PEOPLE_NSV);
    let copy = dir.path().join("copy.nsv");

    nsv_cmd()
        .arg(&input)
        .args(["--format", "nsv"])
        .args(["--output", copy.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&copy).unwrap(), PEOPLE_NSV);
}

#[test]
fn test_trailing_row_asymmetry() {
    let dir = TempDir::new().unwrap();
    // Last row lacks its terminating blank line.
    let input = write_fixture(&dir, "cut.nsv", "name\n\nAlice\n");

    nsv_cmd()
        .arg(&input)
        .arg("--stats-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows:    0"));

    nsv_cmd()
        .arg(&input)
        .args(["--stats-only", "--flush-trailing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows:    1"));
}

#[test]
fn test_no_header_generates_column_names() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "raw.nsv", "a\nb\n\nc\nd\n\n");

    nsv_cmd()
        .arg(&input)
        .args(["--stats-only", "--no-header"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows:    2"))
        .stdout(predicate::str::contains("[0] col0"));
}

#[test]
fn test_explicit_columns_override() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "raw.nsv", "1\n2\n\n3\n4\n\n");

    nsv_cmd()
        .arg(&input)
        .args(["--stats-only", "--columns", "x,y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows:    2"))
        .stdout(predicate::str::contains("[0] x"));
}

#[test]
fn test_empty_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "empty.nsv", "");

    nsv_cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty NSV file"));
}

#[test]
fn test_json_input() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "people.json",
        r#"[{"name":"Alice","age":30},{"name":"Bob","age":25}]"#,
    );
    let output = dir.path().join("people.nsv");

    nsv_cmd()
        .arg(&input)
        .args(["--format", "nsv"])
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "name\nage\n\nAlice\n30\n\nBob\n25\n\n"
    );
}
