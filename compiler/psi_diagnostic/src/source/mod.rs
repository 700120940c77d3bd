//! Source text split into lines for error reports.

use std::fs;
use std::io;
use std::path::Path;

/// A named source file, held as its raw lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Lines are addressed
/// 1-based, the way tokens report them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    lines: Vec<String>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        SourceFile {
            name: name.into(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SourceFile {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a file from disk. The report shows the path as given.
    pub fn read(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), &text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Raw text of line `number` (1-based).
    ///
    /// # Panics
    ///
    /// If `number` is 0 or past the last line.
    pub fn line(&self, number: usize) -> &str {
        assert!(
            (1..=self.lines.len()).contains(&number),
            "line {number} is out of range for `{}` ({} lines)",
            self.name,
            self.lines.len()
        );
        &self.lines[number - 1]
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
