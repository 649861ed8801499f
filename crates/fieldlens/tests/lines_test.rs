//! Integration tests for `fieldlens lines`

#![allow(deprecated)]

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use fieldlens_testkit::{temp_dir_in_workspace, write_fixture, write_numbered_lines};
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_lines_default_path_and_window() {
    let temp = temp_dir_in_workspace();
    write_numbered_lines(temp.path(), "src/app/fillnda/page.tsx", 1100);

    let output = Command::cargo_bin("fieldlens")
        .unwrap()
        .current_dir(temp.path())
        .arg("lines")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Lines 1070-1095:");
    assert_eq!(lines[1], r"1070: 'line 1070\n'");
    assert_eq!(lines[26], r"1095: 'line 1095\n'");
    assert_eq!(lines[27], "");
    assert_eq!(lines[28], "Total lines: 1100");
    assert_eq!(lines.len(), 29);
}

#[test]
fn test_lines_window_beyond_short_file() {
    let temp = temp_dir_in_workspace();
    let path = write_numbered_lines(temp.path(), "page.tsx", 200);

    Command::cargo_bin("fieldlens")
        .unwrap()
        .arg("lines")
        .arg(&path)
        .assert()
        .success()
        .stdout("Lines 1070-1095:\n\nTotal lines: 200\n");
}

#[test]
fn test_lines_custom_window_shows_escapes() {
    let temp = temp_dir_in_workspace();
    let path = write_fixture(temp.path(), "page.tsx", "first\n\tsecond\r\n'third'\n");

    Command::cargo_bin("fieldlens")
        .unwrap()
        .arg("lines")
        .arg(&path)
        .args(["--start", "1", "--end", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"2: '\tsecond\r\n'"))
        .stdout(predicate::str::contains(r#"3: "'third'\n""#))
        .stdout(predicate::str::contains("1: ").not())
        .stdout(predicate::str::contains("Total lines: 3"));
}

#[test]
fn test_lines_does_not_modify_file() {
    let temp = temp_dir_in_workspace();
    let path = write_fixture(temp.path(), "page.tsx", "a\nb\n");

    Command::cargo_bin("fieldlens")
        .unwrap()
        .arg("lines")
        .arg(&path)
        .args(["--start", "0", "--end", "2"])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
}

#[test]
fn test_lines_missing_file_fails() {
    let temp = temp_dir_in_workspace();

    Command::cargo_bin("fieldlens")
        .unwrap()
        .current_dir(temp.path())
        .arg("lines")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("FILE_ACCESS_ERROR"));
}

#[test]
fn test_lines_invalid_utf8_fails() {
    let temp = temp_dir_in_workspace();
    let path = write_fixture(temp.path(), "page.tsx", [0xffu8, 0xfe, b'\n']);

    Command::cargo_bin("fieldlens")
        .unwrap()
        .arg("lines")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DECODING_ERROR"));
}
