//! Tokens produced by the PSI scanner.

mod kind;
mod lexeme;

pub use kind::{Category, TokenKind, END_KEYWORDS, END_OPERATORS, END_PUNCTUATION};
pub use lexeme::{match_lexeme, LEXEMES};

use std::fmt;

/// A classified unit of source text.
///
/// Tokens are created by the scanner and never mutated afterwards. For
/// [`TokenKind::Error`] tokens, `text` is the error message rather than a
/// lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Create an error token carrying `message`.
    pub fn error(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(TokenKind::Error, message, line, column)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

/// Canonical rendering: `«if»` for keywords, quoted strings and chars,
/// the kind name for `EOF`/`ERROR`, raw text otherwise.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof | TokenKind::Error => f.write_str(self.kind.name()),
            kind if kind.is_keyword() => {
                write!(f, "\u{ab}{}\u{bb}", kind.name().to_lowercase())
            }
            TokenKind::String => write!(f, "\"{}\"", self.text),
            TokenKind::Char => write!(f, "'{}'", self.text),
            _ => f.write_str(&self.text),
        }
    }
}
