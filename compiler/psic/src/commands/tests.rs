use super::*;
use pretty_assertions::assert_eq;
use psi_diagnostic::ColorMode;
use std::path::PathBuf;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

// === Argument parsing ===

#[test]
fn parses_positional_arguments() {
    let options = parse_report_args(&args(&["main.psi", "3", "7", "unknown", "character"])).unwrap();
    assert_eq!(
        options,
        ReportOptions {
            path: PathBuf::from("main.psi"),
            line: 3,
            column: 7,
            message: "unknown character".to_string(),
            color: ColorMode::Auto,
        }
    );
}

#[test]
fn color_flag_may_appear_anywhere() {
    let options =
        parse_report_args(&args(&["--color=never", "a.psi", "1", "1", "bad", "--color=always"]))
            .unwrap();
    assert_eq!(options.color, ColorMode::Always);
    assert_eq!(options.message, "bad");
}

#[test]
fn rejects_bad_color_mode() {
    let err = parse_report_args(&args(&["a.psi", "1", "1", "bad", "--color=pink"])).unwrap_err();
    assert!(err.to_string().contains("invalid color mode `pink`"));
}

#[test]
fn rejects_missing_arguments() {
    assert!(matches!(
        parse_report_args(&args(&["a.psi", "1"])),
        Err(ReportError::Usage(_))
    ));
    let err = parse_report_args(&args(&["a.psi", "1", "2"])).unwrap_err();
    assert_eq!(err.to_string(), "missing error message");
}

#[test]
fn rejects_zero_and_non_numeric_positions() {
    let err = parse_report_args(&args(&["a.psi", "0", "1", "bad"])).unwrap_err();
    assert_eq!(err.to_string(), "line must be a positive number, got `0`");
    let err = parse_report_args(&args(&["a.psi", "1", "x", "bad"])).unwrap_err();
    assert_eq!(err.to_string(), "column must be a positive number, got `x`");
}

// === Report building ===

fn options_for(path: PathBuf, line: u32) -> ReportOptions {
    ReportOptions {
        path,
        line,
        column: 1,
        message: "bad".to_string(),
        color: ColorMode::Never,
    }
}

#[test]
fn builds_report_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("p.psi");
    std::fs::write(&path, "program p;\nbegin\nend.\n").unwrap();

    let report = build_report(&options_for(path.clone(), 2)).unwrap();
    let text = report.to_string();
    assert!(text.starts_with(&format!("File: {}\n", path.display())));
    assert!(text.contains("   2│begin\n     ^\n    bad\n   3│end.\n"));
}

#[test]
fn line_past_end_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("p.psi");
    std::fs::write(&path, "one\ntwo\n").unwrap();

    let err = build_report(&options_for(path, 3)).unwrap_err();
    assert!(matches!(
        err,
        ReportError::LineOutOfRange {
            line: 3,
            count: 2,
            ..
        }
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = build_report(&options_for(dir.path().join("gone.psi"), 1)).unwrap_err();
    assert!(matches!(err, ReportError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read `"));
}

// === Lexeme table ===

#[test]
fn lexeme_table_lists_entries_in_priority_order() {
    let table = lexeme_table();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), psi_ir::LEXEMES.len());
    assert_eq!(lines[0], " 1  <>  NEQ");
    assert_eq!(lines[1], " 2  <=  LEQ");
    assert_eq!(lines[9], "10  <   LT");
    assert_eq!(lines[17], "18  :   COLON");
}
