//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn longhand() -> Command {
    Command::cargo_bin("longhand").unwrap()
}

#[test]
fn solve_prints_worked_layout() {
    longhand()
        .arg("solve")
        .arg("23")
        .arg("14")
        .assert()
        .success()
        .stdout(predicate::str::contains("092"))
        .stdout(predicate::str::contains("23."))
        .stdout(predicate::str::contains("322"))
        .stdout(predicate::str::contains("23 × 14 = 322"));
}

#[test]
fn solve_zero_partial_row() {
    longhand()
        .arg("solve")
        .arg("23")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("000"))
        .stdout(predicate::str::contains("23."))
        .stdout(predicate::str::contains("230"));
}

#[test]
fn solve_rejects_zero_factor() {
    longhand().arg("solve").arg("0").arg("14").assert().failure();
}

#[test]
fn validate_defaults_without_config_file() {
    let dir = TempDir::new().unwrap();
    longhand()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config valid"))
        .stdout(predicate::str::contains("5 trials"));
}

#[test]
fn validate_rejects_zero_trials() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("longhand.toml"), "total_trials = 0\n").unwrap();
    longhand()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("total_trials"));
}

#[test]
fn validate_rejects_dangling_default_sink() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("longhand.toml"),
        "default_sink = \"firebase\"\n",
    )
    .unwrap();
    longhand()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_sink"));
}

#[test]
fn init_then_validate() {
    let dir = TempDir::new().unwrap();
    longhand()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created longhand.toml"));

    longhand()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config valid"));

    // Re-running init never clobbers an existing config.
    longhand()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn play_with_blank_input_completes_session() {
    let dir = TempDir::new().unwrap();
    longhand()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("play")
        .arg("--trials")
        .arg("1")
        .arg("--digits")
        .arg("2")
        .arg("--seed")
        .arg("3")
        .write_stdin("\n".repeat(8))
        .assert()
        .success()
        .stdout(predicate::str::contains("Trial 1 of 1"))
        .stdout(predicate::str::contains("Session complete: 0/1 correct (0.0%)"))
        .stdout(predicate::str::contains("Result: FAILED"))
        .stdout(predicate::str::contains("Report saved to"));
}

#[test]
fn play_shows_progress_between_trials() {
    let dir = TempDir::new().unwrap();
    longhand()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("play")
        .arg("--trials")
        .arg("2")
        .arg("--digits")
        .arg("2")
        .arg("--seed")
        .arg("7")
        .write_stdin("\n".repeat(12))
        .assert()
        .success()
        .stdout(predicate::str::contains("Trial 1 of 2"))
        .stdout(predicate::str::contains("progress: 50%"))
        .stdout(predicate::str::contains("Trial 2 of 2"));
}

#[test]
fn play_rejects_zero_trials() {
    let dir = TempDir::new().unwrap();
    longhand()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("play")
        .arg("--trials")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("total_trials"));
}
