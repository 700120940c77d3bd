//! Terminal Emitter
//!
//! Human-readable report output with optional ANSI color support.

use std::io::{self, Write};

use crate::report::{Report, Segment, Style};

/// ANSI color codes for terminal output.
mod colors {
    pub const ATTENTION: &str = "\x1b[33m"; // Yellow
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn from_flag(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write a report, preceded by a blank separator line.
    ///
    /// The writer is flushed even when writing fails part way; the first
    /// error is returned.
    pub fn emit(&mut self, report: &Report) -> io::Result<()> {
        let mut out = String::from("\n");
        for line in report.lines() {
            for segment in line.segments() {
                self.push_segment(&mut out, segment);
            }
            out.push('\n');
        }

        let written = self.writer.write_all(out.as_bytes());
        let flushed = self.writer.flush();
        written.and(flushed)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn push_segment(&self, out: &mut String, segment: &Segment) {
        match segment.style {
            Style::Attention if self.colors => {
                out.push_str(colors::ATTENTION);
                out.push_str(&segment.text);
                out.push_str(colors::RESET);
            }
            Style::Attention | Style::Plain => out.push_str(&segment.text),
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - Color mode selection (`Auto`, `Always`, or `Never`)
    /// * `is_tty` - Whether stderr is a TTY (used for `ColorMode::Auto`)
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}
