//! End-to-end tests for the `psi` binary.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn psi(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_psi"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_source(dir: &Path) -> String {
    let path = dir.join("demo.psi");
    std::fs::write(
        &path,
        "program demo;\nbegin\n   a := 3 $ 4;\n   print a;\nend.\n",
    )
    .unwrap();
    path.display().to_string()
}

#[test]
fn report_writes_diagnostic_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    let output = psi(&["report", &path, "3", "11", "unknown", "character", "--color=never"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let rule = "─".repeat(path.chars().count());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        format!(
            "\nFile: {path}\n────┬─{rule}\n   1│program demo;\n   2│begin\n   3│   a := 3 $ 4;\n               ^\n       unknown character\n   4│   print a;\n   5│end.\n"
        )
    );
}

#[test]
fn report_colors_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    let output = psi(&["report", &path, "5", "1", "oops", "--color=always"]);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("\x1b[33m^\x1b[0m"));
    assert!(stderr.ends_with("\x1b[33moops\x1b[0m\n"));
}

#[test]
fn report_out_of_range_line_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    let output = psi(&["report", &path, "9", "1", "oops"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 9 is out of range"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn report_usage_error_exits_2() {
    let output = psi(&["report", "only-a-file.psi"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Usage: psi report"));
}

#[test]
fn lexemes_prints_table() {
    let output = psi(&["lexemes"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 18);
    assert!(stdout.starts_with(" 1  <>  NEQ\n 2  <=  LEQ\n"));
}

#[test]
fn unknown_command_fails() {
    let output = psi(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Unknown command: frobnicate"));
}

#[test]
fn no_arguments_prints_usage() {
    let output = psi(&[]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .starts_with("PSI Compiler"));
}
