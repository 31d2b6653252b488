//! Runs the built binary and checks what it prints.

use std::process::{Command, Output};

use super::common::{ban_everything, word_list_dir};
use safecode::{CharacterPool, Validator, CODE_LENGTH, DEFAULT_COUNT};

fn safecode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_safecode"))
        .args(args)
        .env_remove("SAFECODE_WORD_LIST")
        .env_remove("SAFECODE_CHARS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run safecode")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_count() {
    let output = safecode(&[]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), DEFAULT_COUNT);

    let validator = Validator::with_default_list();
    let pool = CharacterPool::default();
    for code in &lines {
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| pool.contains(c)), "{}", code);
        assert!(validator.validate(code), "{}", code);
    }
}

#[test]
fn test_explicit_count() {
    let output = safecode(&["12"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 12);
}

#[test]
fn test_non_positive_count_prints_one() {
    assert_eq!(stdout_lines(&safecode(&["0"])).len(), 1);
    assert_eq!(stdout_lines(&safecode(&["-3"])).len(), 1);
}

#[test]
fn test_non_numeric_count_is_usage_error() {
    let output = safecode(&["lots"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_single_character_pool() {
    let output = safecode(&["3", "--chars", "B"]);
    assert_eq!(stdout_lines(&output), vec!["BBBBBB"; 3]);
}

#[test]
fn test_exhaustion_prints_diagnostic_and_no_codes() {
    let (_dir, path) = word_list_dir(&ban_everything(&CharacterPool::default()));
    let output = safecode(&["10", "--word-list", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1000 attempts"), "stderr: {}", stderr);
}

#[test]
fn test_huge_count_with_total_ban_exhausts_cleanly() {
    let (_dir, path) = word_list_dir(&ban_everything(&CharacterPool::default()));
    let output = safecode(&["1000000000000", "--word-list", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1000 attempts"), "stderr: {}", stderr);
}

#[test]
fn test_redirected_logs_have_no_colour_codes() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");
    let output = safecode(&["1", "--word-list", missing.to_str().unwrap()]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN"), "stderr: {}", stderr);
    assert!(!stderr.contains('\x1b'), "stderr: {:?}", stderr);
}

#[test]
fn test_missing_word_list_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("blacklistTEST.txt");
    let output = safecode(&["5", "--word-list", missing.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 5);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
}

#[test]
fn test_json_format() {
    let output = safecode(&["2", "--format", "json"]);
    assert!(output.status.success());
    let codes: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(codes.len(), 2);
}

#[test]
fn test_check_command() {
    let output = safecode(&["check", "RATSXX", "XXX778"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["RATSXX\trejected: RATS", "XXX778\tok"]
    );
}

#[test]
fn test_empty_chars_rejected() {
    let output = safecode(&["--chars", ""]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
