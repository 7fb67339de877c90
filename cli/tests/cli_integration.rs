//! End-to-end tests driving the `cmdr` binary.
//!
//! Every outcome, including lookup and validation failures, leaves the
//! process with exit code 0; failures are observed on stderr only.

use std::path::PathBuf;
use std::process::{Command, Output};

fn cmdr_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cmdr"))
}

fn run(args: &[&str]) -> Output {
    Command::new(cmdr_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cmdr")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_command_prints_usage() {
    let output = run(&[]);

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("usage: cmdr"), "missing usage line: {err}");
    assert!(err.contains("inspect"));
    assert!(err.contains("status"));
}

#[test]
fn test_unknown_command_reports_on_stderr() {
    let output = run(&["frobnicate"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("unknown command: frobnicate"));
}

#[test]
fn test_status_echoes_positional() {
    let output = run(&["status", "web"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("cmdr: ready"));
    assert!(out.contains("web"));
}

#[test]
fn test_status_rejects_extra_arguments() {
    let output = run(&["status", "a", "b"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty(), "callback must not run");
    assert!(stderr(&output).contains("too many arguments"));
}

#[test]
fn test_status_has_no_help() {
    // `status` declares no help text, so `--help` is just an unknown option.
    let output = run(&["status", "--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("no matching option for \"help\""));
}

#[test]
fn test_inspect_emits_parseable_json() {
    let output = run(&["inspect", "a", "--pretty", "b"]);

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output))
        .unwrap_or_else(|e| panic!("invalid JSON output: {e}"));

    let groups = parsed.as_array().expect("top-level JSON array");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["positional"], "a");
    assert_eq!(groups[0]["options"][0], "pretty");
    assert_eq!(groups[1]["positional"], "b");
    assert_eq!(groups[1]["options"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_inspect_leading_options_group() {
    let output = run(&["inspect", "-p", "x"]);

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    let groups = parsed.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["positional"], "");
    assert_eq!(groups[0]["options"][0], "p");
    assert_eq!(groups[1]["positional"], "x");
}

#[test]
fn test_inspect_help_prints_help_text() {
    let output = run(&["inspect", "--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with('\n'), "help is preceded by a blank line");
    assert!(out.contains("usage: cmdr inspect"));
    assert!(out.contains("--pretty"));
}

#[test]
fn test_inspect_short_help() {
    let output = run(&["inspect", "-h"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("usage: cmdr inspect"));
}

#[test]
fn test_inspect_unknown_option() {
    let output = run(&["inspect", "-q"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("no matching option for \"q\""));
}
