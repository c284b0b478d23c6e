//! Process-level tests: the real binary, real files, exit codes and output.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FILE_A: &str = concat!(
    "{\"@timestamp\": \"2023-01-01T12:00:00\", \"url\": \"/a\", \"response_time\": 100}\n",
    "{\"@timestamp\": \"2023-01-01T12:01:00\", \"url\": \"/a\", \"response_time\": 200}\n",
    "{\"@timestamp\": \"2023-01-02T12:00:00\", \"url\": \"/b\", \"response_time\": 50}\n",
);

const FILE_B: &str =
    "{\"@timestamp\": \"2023-01-01T09:30:00\", \"url\": \"/a\", \"response_time\": 300}\n";

fn write_log(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn reqstat() -> Command {
    let mut cmd = Command::cargo_bin("reqstat").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn average_report_over_two_files() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let a = write_log(dir.path(), "a.log", FILE_A);
    let b = write_log(dir.path(), "b.log", FILE_B);

    // Act
    let output = reqstat()
        .arg("--file")
        .arg(&a)
        .arg(&b)
        .args(["--report", "average"])
        .assert()
        .success()
        .get_output()
        .clone();

    // Assert
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Handler"));
    assert!(stdout.contains("Average Response Time"));
    let a_row = stdout.lines().find(|l| l.contains("/a")).unwrap();
    assert!(a_row.contains('3') && a_row.contains("200"));
    assert!(stdout.find("/a").unwrap() < stdout.find("/b").unwrap());
}

#[test]
fn date_filter_limits_report() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let a = write_log(dir.path(), "a.log", FILE_A);

    // Act + Assert
    reqstat()
        .arg("--file")
        .arg(&a)
        .args(["--report", "average", "--date", "2023-01-01"])
        .assert()
        .success()
        .stdout(contains("/a").and(contains("150")).and(contains("/b").not()));
}

#[test]
fn unknown_report_type_lists_available_types() {
    let dir = TempDir::new().unwrap();
    let a = write_log(dir.path(), "a.log", FILE_A);

    reqstat()
        .arg("--file")
        .arg(&a)
        .args(["--report", "percentile"])
        .assert()
        .code(1)
        .stderr(contains("'percentile' is not supported").and(contains("Available: average")));
}

#[test]
fn missing_report_type_lists_available_types() {
    let dir = TempDir::new().unwrap();
    let a = write_log(dir.path(), "a.log", FILE_A);

    reqstat()
        .arg("--file")
        .arg(&a)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("is not supported").and(contains("Available: average")));
}

#[test]
fn missing_file_argument_is_a_usage_error() {
    reqstat()
        .args(["--report", "average"])
        .assert()
        .code(1)
        .stderr(contains("Invalid parameters").and(contains("--file")));
}

#[test]
fn unknown_flag_is_rejected() {
    reqstat()
        .args(["--unknown", "value"])
        .assert()
        .code(1)
        .stderr(contains("Invalid parameters").and(contains("--unknown")));
}

#[test]
fn invalid_date_is_a_usage_error() {
    reqstat()
        .args(["--file", "file.log", "--report", "average", "--date", "invalid"])
        .assert()
        .code(1)
        .stderr(contains("invalid date format"));
}

#[test]
fn missing_log_file_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    reqstat()
        .arg("--file")
        .arg(dir.path().join("nope.log"))
        .args(["--report", "average"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("log file not found"));
}

#[test]
fn file_without_matching_day_fails_whole_run() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let a = write_log(dir.path(), "a.log", FILE_A);
    let b = write_log(dir.path(), "b.log", FILE_B);

    // Act + Assert
    reqstat()
        .arg("--file")
        .arg(&a)
        .arg(&b)
        .args(["--report", "average", "--date", "2023-01-02"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("no records left to aggregate"));
}

#[test]
fn config_file_renames_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let log = write_log(
        dir.path(),
        "custom.log",
        "{\"path\": \"/custom\", \"latency\": 7}\n{\"path\": \"/custom\", \"latency\": 9}\n",
    );
    let cfg = write_log(
        dir.path(),
        "reqstat.toml",
        "[fields]\nendpoint = \"path\"\nresponse_time = \"latency\"\n",
    );

    // Act + Assert
    reqstat()
        .arg("--file")
        .arg(&log)
        .args(["--report", "average", "--config"])
        .arg(&cfg)
        .assert()
        .success()
        .stdout(contains("/custom").and(contains('8')));
}

#[test]
fn malformed_lines_are_skipped_with_warning() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let log = write_log(
        dir.path(),
        "mixed.log",
        &format!("{FILE_B}this is not json\n{FILE_B}"),
    );

    // Act + Assert
    reqstat()
        .arg("--file")
        .arg(&log)
        .args(["--report", "average", "--log-format", "json"])
        .assert()
        .success()
        .stdout(contains("/a").and(contains("300")))
        .stderr(contains("skipping malformed log line"));
}

#[test]
fn rust_log_enables_run_events_on_stderr() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let a = write_log(dir.path(), "a.log", FILE_A);

    // Act + Assert
    reqstat()
        .env("RUST_LOG", "info")
        .arg("--file")
        .arg(&a)
        .args(["--report", "average", "--log-format", "json"])
        .assert()
        .success()
        .stdout(contains("starting report run").not())
        .stderr(contains("starting report run").and(contains("report run finished")));
}

#[test]
fn default_log_level_hides_run_events() {
    let dir = TempDir::new().unwrap();
    let a = write_log(dir.path(), "a.log", FILE_A);

    reqstat()
        .arg("--file")
        .arg(&a)
        .args(["--report", "average", "--log-format", "json"])
        .assert()
        .success()
        .stderr(contains("starting report run").not());
}

#[test]
fn help_exits_successfully() {
    reqstat()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--file").and(contains("--report")));
}
