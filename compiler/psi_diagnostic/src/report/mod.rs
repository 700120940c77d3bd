//! Error Report Layout
//!
//! Lays out a lexical or syntax error against the surrounding source:
//!
//! ```text
//! File: demo.psi
//! ────┬─────────
//!    1│program demo;
//!    2│begin
//!    3│   a := 3 $ 4;
//!                ^
//!        unknown character
//!    4│   print a;
//!    5│end.
//! ```
//!
//! Up to three lines lead up to the error line (the error line included),
//! then a caret marks the error column with the message centered under it,
//! then up to two lines follow. Layout is pure: the result is a [`Report`]
//! of styled segments, and turning styles into terminal colors is the
//! emitter's job.

use std::fmt;

use psi_ir::Token;
use tracing::debug;

use crate::SourceFile;

/// Header printed before the file name.
const HEADER: &str = "File: ";

const HORIZONTAL: char = '\u{2500}'; // ─
const DOWN_TEE: char = '\u{252c}'; // ┬
const VERTICAL: char = '\u{2502}'; // │
const CARET: char = '^';

/// How many source lines are shown up to and including the error line.
const LEADING_LINES: usize = 3;
/// How many source lines are shown after the error line.
const TRAILING_LINES: usize = 2;

/// Presentation hint for a segment of report text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Plain,
    /// The caret and the message; emitters highlight these.
    Attention,
}

/// A run of text with a single style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

/// One output line, made of styled segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportLine {
    segments: Vec<Segment>,
}

impl ReportLine {
    fn plain(text: String) -> Self {
        ReportLine {
            segments: vec![Segment {
                text,
                style: Style::Plain,
            }],
        }
    }

    /// `indent` plain spaces followed by highlighted `text`.
    fn highlighted(indent: usize, text: String) -> Self {
        ReportLine {
            segments: vec![
                Segment {
                    text: " ".repeat(indent),
                    style: Style::Plain,
                },
                Segment {
                    text,
                    style: Style::Attention,
                },
            ],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The line's text without styling.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A laid-out error report.
///
/// `Display` renders the report as plain text, one `\n`-terminated line per
/// [`ReportLine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    /// Lay out the report for an error token.
    ///
    /// `token.line` and `token.column` are 1-based; `token.text` is the
    /// message.
    ///
    /// # Panics
    ///
    /// If `token` is not an error token, if `source` has no name, or if the
    /// token's line is not a line of `source`. All three are bugs in the
    /// caller, not conditions to report.
    pub fn error(token: &Token, source: &SourceFile) -> Report {
        assert!(
            token.is_error(),
            "error report requested for non-error token {token} ({}) at {}:{}",
            token.kind,
            token.line,
            token.column
        );
        assert!(
            !source.name().is_empty(),
            "error report requested for a source file without a name"
        );

        let line = token.line as usize;
        let column = token.column as usize;
        let total = source.line_count();
        assert!(
            (1..=total).contains(&line),
            "error token line {line} is out of range for `{}` ({total} lines)",
            source.name()
        );

        debug!(
            file = source.name(),
            line,
            column,
            message = %token.text,
            "laying out error report"
        );

        let width = separator_width(total);
        let mut lines = Vec::with_capacity(2 + LEADING_LINES + 2 + TRAILING_LINES);
        lines.push(ReportLine::plain(format!("{HEADER}{}", source.name())));
        lines.push(ReportLine::plain(box_line(width, source.name())));

        let leading = if line <= 2 { line } else { LEADING_LINES };
        for i in (1..=leading).rev() {
            lines.push(numbered_line(width, source, line - i + 1));
        }

        // The label's bar sits at `width - 2`, so column 1 lands one past it.
        let caret = width - 2 + column;
        lines.push(ReportLine::highlighted(caret, CARET.to_string()));

        // Clamped to the left margin when the message is wider than the caret offset allows.
        let half = token.text.chars().count() / 2;
        lines.push(ReportLine::highlighted(
            caret.saturating_sub(half),
            token.text.clone(),
        ));

        let trailing = if total <= line + 1 {
            total - line
        } else {
            TRAILING_LINES
        };
        for i in 1..=trailing {
            lines.push(numbered_line(width, source, line + i));
        }

        Report { lines }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// The whole report without styling, each line `\n`-terminated.
    pub fn to_plain_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            for segment in &line.segments {
                f.write_str(&segment.text)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Width of the gutter-plus-box prefix: wide enough for the header and for
/// the largest line number.
fn separator_width(line_count: usize) -> usize {
    HEADER.len().max(line_count.to_string().len())
}

/// `width` rule glyphs with a down-tee over the gutter bar, extended under
/// the file name.
fn box_line(width: usize, file_name: &str) -> String {
    let mut out = String::with_capacity((width + file_name.len()) * HORIZONTAL.len_utf8());
    for i in 0..width {
        out.push(if i == width - 2 { DOWN_TEE } else { HORIZONTAL });
    }
    out.extend(std::iter::repeat(HORIZONTAL).take(file_name.chars().count()));
    out
}

/// Source line `number`, with its label right-justified against the bar.
fn numbered_line(width: usize, source: &SourceFile, number: usize) -> ReportLine {
    let label = format!("{number}{VERTICAL}");
    let pad = (width - 1).saturating_sub(label.chars().count());
    ReportLine::plain(format!("{}{label}{}", " ".repeat(pad), source.line(number)))
}
