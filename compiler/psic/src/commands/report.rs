//! The `report` command: render an error report for a position in a file.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use psi_diagnostic::{ColorMode, Report, SourceFile, TerminalEmitter};
use psi_ir::Token;
use thiserror::Error;
use tracing::debug;

/// Parsed `report` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub path: PathBuf,
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub color: ColorMode,
}

/// Failures of the `report` command.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line} is out of range for `{}` ({count} lines)", .path.display())]
    LineOutOfRange {
        path: PathBuf,
        line: u32,
        count: usize,
    },
    #[error("failed to write report: {0}")]
    Emit(#[from] io::Error),
}

/// Parse `report` arguments (everything after the command name).
///
/// Expects `<file> <line> <column> <message...>`; `--color=<mode>` may
/// appear anywhere. Message words are joined with single spaces.
pub fn parse_report_args(args: &[String]) -> Result<ReportOptions, ReportError> {
    let mut color = ColorMode::Auto;
    let mut positional = Vec::new();

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--color=") {
            color = ColorMode::from_flag(mode).ok_or_else(|| {
                ReportError::Usage(format!(
                    "invalid color mode `{mode}` (expected auto, always or never)"
                ))
            })?;
        } else {
            positional.push(arg.as_str());
        }
    }

    let [path, line, column, message @ ..] = positional.as_slice() else {
        return Err(ReportError::Usage(
            "expected <file> <line> <column> <message>".to_string(),
        ));
    };
    if message.is_empty() {
        return Err(ReportError::Usage("missing error message".to_string()));
    }

    Ok(ReportOptions {
        path: PathBuf::from(path),
        line: parse_position("line", line)?,
        column: parse_position("column", column)?,
        message: message.join(" "),
        color,
    })
}

fn parse_position(what: &str, value: &str) -> Result<u32, ReportError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ReportError::Usage(format!(
            "{what} must be a positive number, got `{value}`"
        ))),
    }
}

/// Lay out the report for `options` against the file on disk.
pub fn build_report(options: &ReportOptions) -> Result<Report, ReportError> {
    let source = SourceFile::read(&options.path).map_err(|source| ReportError::Read {
        path: options.path.clone(),
        source,
    })?;

    let count = source.line_count();
    if options.line as usize > count {
        return Err(ReportError::LineOutOfRange {
            path: options.path.clone(),
            line: options.line,
            count,
        });
    }

    debug!(path = %options.path.display(), count, "read source for report");
    let token = Token::error(options.message.clone(), options.line, options.column);
    Ok(Report::error(&token, &source))
}

/// Render the report to stderr.
pub fn report_error(options: &ReportOptions) -> Result<(), ReportError> {
    let report = build_report(options)?;
    let is_tty = io::stderr().is_terminal();
    TerminalEmitter::stderr(options.color, is_tty).emit(&report)?;
    Ok(())
}
