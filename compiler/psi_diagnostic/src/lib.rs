//! Source-context error reports.
//!
//! A lexical or syntax error is reported as a single [`Report`]: the file
//! name, a box line, a few numbered source lines around the error, a caret
//! under the error column and the message centered beneath it.
//!
//! ```text
//! let source = SourceFile::read(path)?;
//! let report = Report::error(&token, &source);
//! TerminalEmitter::stderr(ColorMode::Auto, is_tty).emit(&report)?;
//! ```
//!
//! Layout ([`Report::error`]) is pure and testable without a terminal; colors are
//! applied by the [`emitter`].

pub mod emitter;
mod report;
mod source;

pub use emitter::{ColorMode, TerminalEmitter};
pub use report::{Report, ReportLine, Segment, Style};
pub use source::SourceFile;
