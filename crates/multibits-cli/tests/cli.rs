use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn multibits() -> Command {
    Command::cargo_bin("multibits").expect("binary should build")
}

#[test]
fn encode_single_max_square() {
    multibits()
        .args(["encode", "--set", "63=1"])
        .assert()
        .success()
        .stdout("0x8000000000000000\n");
}

#[test]
fn decode_prints_board_rank_eight_first() {
    let output = multibits()
        .args(["decode", "0x1, 0x0, 0x8000000000000000"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "0 0 0 0 0 0 0 1");
    assert_eq!(lines[7], "4 0 0 0 0 0 0 0");
}

#[test]
fn decode_reads_stdin() {
    multibits()
        .arg("decode")
        .write_stdin("0x2,\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("0 2 0 0 0 0 0 0\n"));
}

#[test]
fn decode_json_snapshot() {
    multibits()
        .args(["decode", "--format", "json", "0x8000000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_value\": 1"))
        .stdout(predicate::str::contains("\"result\": \"0x8000000000000000\""));
}

#[test]
fn parse_error_is_reported_not_panicked() {
    multibits()
        .args(["decode", "1, abc, 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decoding literals"))
        .stderr(predicate::str::contains("invalid digit 'a' in literal 1"));
}

#[test]
fn config_reject_policies() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("multibits.yaml");
    fs::write(&config, "edit_policy: reject\noverflow: reject\n").unwrap();

    multibits()
        .arg("--config")
        .arg(&config)
        .args(["encode", "--set", "e4=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a non-negative integer"));

    multibits()
        .arg("--config")
        .arg(&config)
        .args(["encode", "5", "--width", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not fit in 2 planes"));

    multibits()
        .args(["encode", "5", "--width", "2"])
        .assert()
        .success()
        .stdout("0x0, 0x1\n");
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.yaml");
    fs::write(&config, "edit_policy: sometimes\n").unwrap();

    multibits()
        .arg("--config")
        .arg(&config)
        .arg("board")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing config"));
}
