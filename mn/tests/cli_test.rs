//! Tests for the `mn` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mn() -> Command {
    Command::cargo_bin("mn").expect("binary should be built")
}

#[test]
fn test_prints_single_result_line() {
    mn().args(["-n", "1000"])
        .assert()
        .success()
        .stdout("The magic number is: 0\n");
}

#[test]
fn test_asymmetric_bounds() {
    mn().args(["--increments", "5", "--decrements", "3"])
        .assert()
        .success()
        .stdout("The magic number is: 2\n");
}

#[test]
fn test_worker_env_override() {
    mn().env("MN_WORKERS", "1")
        .args(["-n", "500", "--stats"])
        .assert()
        .success()
        .stdout("The magic number is: 0\n")
        .stderr(predicate::str::contains("Workers:      1"));
}

#[test]
fn test_mutex_strategy() {
    mn().args(["-s", "mutex", "-n", "2000", "-w", "2"])
        .assert()
        .success()
        .stdout("The magic number is: 0\n");
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("magicnumber.yml"), "increments: 9\ndecrements: 2\n").unwrap();

    mn().current_dir(dir.path())
        .assert()
        .success()
        .stdout("The magic number is: 7\n");
}

#[test]
fn test_zero_workers_is_fatal() {
    mn().args(["-w", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("workers must be at least 1"));
}

#[test]
fn test_bad_config_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yml");
    std::fs::write(&path, "workers: [not, a, number]\n").unwrap();

    mn().arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_bound_beyond_counter_range_is_fatal() {
    mn().args(["--increments", "18446744073709551615"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("increments must be below"));
}

#[test]
fn test_single_worker_stats_report_one_thread() {
    mn().args(["-w", "1", "-n", "500", "--stats"])
        .assert()
        .success()
        .stdout("The magic number is: 0\n")
        .stderr(predicate::str::contains("Threads used: 1"));
}
