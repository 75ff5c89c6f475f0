//! Runs the `catalan` binary and checks stdout, stderr and exit status.

use std::process::{Command, Output};

use crate::common::{expected_default_line, DEFAULT_LINE_PREFIX};
use catalan::generate;

fn run_catalan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_catalan"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run catalan binary")
}

#[test]
fn test_no_arguments_prints_default_line() {
    let output = run_catalan(&[]);
    assert!(output.status.success(), "exit status {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.starts_with(DEFAULT_LINE_PREFIX),
        "unexpected prefix: {}",
        &stdout[..stdout.len().min(80)]
    );
    assert!(stdout.ends_with(" \n"), "missing trailing space before newline");
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(stdout.split_whitespace().count(), 100);
    assert_eq!(stdout, expected_default_line(generate(100).as_slice()));
}

#[test]
fn test_no_arguments_writes_nothing_to_stderr() {
    let output = run_catalan(&[]);
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_include_zero_adds_leading_one() {
    let output = run_catalan(&["--limit", "4", "--include-zero"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1 1 2 5 14 \n");
}

#[test]
fn test_closed_form_with_verify_matches_default() {
    let default = run_catalan(&[]);
    let closed = run_catalan(&["--method", "closed-form", "--verify"]);
    assert!(closed.status.success());
    assert_eq!(default.stdout, closed.stdout);
}

#[test]
fn test_json_format() {
    let output = run_catalan(&["-n", "5", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["limit"], 5);
    assert_eq!(value["terms"], serde_json::json!([1, 2, 5, 14, 42]));
}

#[test]
fn test_negative_limit_fails_without_output() {
    let output = run_catalan(&["--limit", "-1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("limit must be >= 0"), "{}", stderr);
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = run_catalan(&["--modulus", "998244353"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_huge_limit_fails_without_panicking() {
    for args in [
        &["--limit", "9223372036854775807"][..],
        &["--limit", "9223372036854775807", "--method", "closed-form"][..],
    ] {
        let output = run_catalan(args);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("exceeds the supported maximum"), "{}", stderr);
        assert!(!stderr.contains("panicked"), "{}", stderr);
    }
}
