//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_SHEET: &str = r#"
[student]
name = "Ada"

[[assignments]]
name = "HW1"
category = "FA"
score = 80

[[assignments]]
name = "HW2"
category = "FA"
score = 20

[[assignments]]
name = "Midterm"
category = "SA"
score = 90
"#;

const BAD_SHEET: &str = r#"
[[assignments]]
name = "Fine"
category = "FA"
score = 75

[[assignments]]
name = "Typo"
category = "FX"
score = 60

[[assignments]]
name = "Overflow"
category = "SA"
score = 101
"#;

/// Command running in an isolated directory so no stray config is picked up.
fn coursetrack(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("coursetrack").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("COURSETRACK_ORDER")
        .env_remove("RUST_LOG");
    cmd
}

fn write_sheet(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in output:\n{haystack}"))
}

#[test]
fn validate_valid_sheet() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);

    coursetrack(dir.path())
        .arg("validate")
        .arg("--sheet")
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada, 3 assignments"))
        .stdout(predicate::str::contains("Sheet valid."));
}

#[test]
fn validate_reports_problems() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "bad.toml", BAD_SHEET);

    coursetrack(dir.path())
        .arg("validate")
        .arg("--sheet")
        .arg(&sheet)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[#2 Typo]"))
        .stdout(predicate::str::contains("category must be 'FA' or 'SA'"))
        .stdout(predicate::str::contains("[#3 Overflow]"))
        .stdout(predicate::str::contains("2 problem(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    coursetrack(dir.path())
        .arg("validate")
        .arg("--sheet")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn run_text_output() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);

    let output = coursetrack(dir.path())
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .arg("--order")
        .arg("DESC")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Student: Ada"));
    assert!(stdout.contains("Formative Total: 40.80%"));
    assert!(stdout.contains("Summative Total: 36.00%"));
    assert!(stdout.contains("Congratulations! You passed! :)"));
    assert!(stdout.contains("- HW2: 20.0%"));

    let midterm = position(&stdout, "Midterm         SA         90.0     40.0");
    let hw1 = position(&stdout, "HW1             FA         80.0     48.0");
    let hw2 = position(&stdout, "HW2             FA         20.0     12.0");
    assert!(midterm < hw1 && hw1 < hw2);

    assert!(stdout.contains("Pass Mark"));
}

#[test]
fn run_defaults_to_ascending() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);

    let output = coursetrack(dir.path())
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let hw2 = position(&stdout, "HW2             FA");
    let midterm = position(&stdout, "Midterm         SA");
    assert!(hw2 < midterm);
}

#[test]
fn run_uses_config_order() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);
    std::fs::write(dir.path().join("coursetrack.toml"), "default_order = \"desc\"\n").unwrap();

    let output = coursetrack(dir.path())
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let midterm = position(&stdout, "Midterm         SA");
    let hw2 = position(&stdout, "HW2             FA");
    assert!(midterm < hw2);
}

#[test]
fn run_env_overrides_config_order() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);

    let output = coursetrack(dir.path())
        .env("COURSETRACK_ORDER", "desc")
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let midterm = position(&stdout, "Midterm         SA");
    let hw2 = position(&stdout, "HW2             FA");
    assert!(midterm < hw2);
}

#[test]
fn run_skips_invalid_entries() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "bad.toml", BAD_SHEET);

    coursetrack(dir.path())
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping entry 2 (Typo)"))
        .stderr(predicate::str::contains("skipping entry 3 (Overflow)"))
        .stdout(predicate::str::contains("Fine            FA"))
        .stdout(predicate::str::contains("Sorry, you need to retake the assessment. :("));
}

#[test]
fn run_skip_warnings_follow_rust_log() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "bad.toml", BAD_SHEET);

    coursetrack(dir.path())
        .env("RUST_LOG", "coursetrack=error")
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping entry").not());
}

#[test]
fn run_debug_logging_with_rust_log() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);

    coursetrack(dir.path())
        .env("RUST_LOG", "coursetrack=debug")
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .assert()
        .success()
        .stderr(predicate::str::contains("recorded assignment"));
}

#[test]
fn run_json_output() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);

    let output = coursetrack(dir.path())
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .arg("--format")
        .arg("json")
        .arg("--order")
        .arg("desc")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["student"], "Ada");
    assert_eq!(report["outcome"], "pass");
    assert_eq!(report["assignments"][0]["name"], "Midterm");
    assert_eq!(report["assignments"][2]["name"], "HW2");
    assert_eq!(report["resubmissions"][0]["name"], "HW2");
    assert_eq!(report["resubmissions"].as_array().unwrap().len(), 1);
}

#[test]
fn run_saves_report() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);
    let report_path = dir.path().join("out").join("report.json");

    coursetrack(dir.path())
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let report = coursetrack_core::report::ProgressReport::load_json(&report_path).unwrap();
    assert_eq!(report.assignments.len(), 3);
    assert!((report.totals.summative - 36.0).abs() < 1e-9);
}

#[test]
fn run_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);

    coursetrack(dir.path())
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn run_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "sheet.toml", SAMPLE_SHEET);

    coursetrack(dir.path())
        .arg("run")
        .arg("--sheet")
        .arg(&sheet)
        .arg("--config")
        .arg("missing.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn interactive_session() {
    let dir = TempDir::new().unwrap();

    let output = coursetrack(dir.path())
        .arg("interactive")
        .write_stdin("HW1\nFA\n80\nHW2\nfa\n20\nOops\nQA\n50\nMidterm\nSA\n90\nend\ndesc\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Welcome to Course Progress Tracker Application!"));
    assert_eq!(
        stdout.matches("Error:Invalid input, Please try again.").count(),
        1
    );
    assert!(stdout.contains("Formative Total: 40.80%"));
    assert!(stdout.contains("Assignments needed to Retake:"));

    let midterm = position(&stdout, "Midterm         SA");
    let hw2 = position(&stdout, "HW2             FA");
    assert!(midterm < hw2);
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    coursetrack(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created coursetrack.toml"))
        .stdout(predicate::str::contains("Created sheets/example.toml"));

    assert!(dir.path().join("coursetrack.toml").exists());
    assert!(dir.path().join("sheets/example.toml").exists());

    coursetrack(dir.path())
        .arg("validate")
        .arg("--sheet")
        .arg("sheets/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sheet valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    coursetrack(dir.path()).arg("init").assert().success();

    coursetrack(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    coursetrack(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Course progress tracker"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    coursetrack(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("coursetrack"));
}
