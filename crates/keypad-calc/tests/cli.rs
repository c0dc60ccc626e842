//! Binary tests for script mode

#![cfg(feature = "tui")]

use assert_cmd::Command;
use predicates::prelude::*;

fn keypad_calc() -> Command {
    let mut cmd = Command::cargo_bin("keypad-calc").unwrap();
    cmd.env_remove("KEYPAD_CALC_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_script_prints_result() {
    keypad_calc()
        .args(["--script", "5 + 3 ="])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_script_divide_by_zero() {
    keypad_calc()
        .args(["--script", "7 / 0 ="])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot divide by zero"));
}

#[test]
fn test_script_echo_prints_every_step() {
    keypad_calc()
        .args(["--script", "1 . 5 ±", "--echo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-1.5"))
        .stdout(predicate::str::contains("1.5"));
}

#[test]
fn test_unknown_label_fails() {
    keypad_calc()
        .args(["--script", "2 ^ 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown input label"));
}

#[test]
fn test_config_file_applies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.json");
    std::fs::write(&path, r#"{"max_digits": 3}"#).unwrap();
    keypad_calc()
        .arg("--config")
        .arg(&path)
        .args(["--script", "1 2 3 4"])
        .assert()
        .success()
        .stdout("Only 3 digits allowed\n");
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.json");
    std::fs::write(&path, r#"{"max_digits": 0}"#).unwrap();
    keypad_calc()
        .arg("--config")
        .arg(&path)
        .args(["--script", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_digits"));
}
