//! Operator and punctuation lexemes, in matching priority order.
//!
//! The scanner tries entries top to bottom and commits to the first lexeme
//! that matches at the current offset. Whenever one lexeme is a prefix of
//! another, the longer one must come first (`<=` before `<`, `:=` before
//! `:`), otherwise the scanner would commit to the shorter token.

use super::TokenKind;

/// Lexeme table consulted by the scanner.
///
/// The second `<=` entry never matches (the first one always wins); it is
/// redundant but maps to the same kind.
pub static LEXEMES: &[(TokenKind, &str)] = &[
    (TokenKind::Neq, "<>"),
    (TokenKind::Leq, "<="),
    (TokenKind::Geq, ">="),
    (TokenKind::Assign, ":="),
    (TokenKind::Add, "+"),
    (TokenKind::Sub, "-"),
    (TokenKind::Mul, "*"),
    (TokenKind::Div, "/"),
    (TokenKind::Eq, "="),
    (TokenKind::Lt, "<"),
    (TokenKind::Leq, "<="),
    (TokenKind::Gt, ">"),
    (TokenKind::Semi, ";"),
    (TokenKind::Period, "."),
    (TokenKind::Comma, ","),
    (TokenKind::Open, "("),
    (TokenKind::Close, ")"),
    (TokenKind::Colon, ":"),
];

/// Find the first table entry whose lexeme starts `input`.
///
/// Returns the kind and the matched lexeme, so the caller knows how many
/// bytes to consume.
pub fn match_lexeme(input: &str) -> Option<(TokenKind, &'static str)> {
    LEXEMES
        .iter()
        .find(|(_, lexeme)| input.starts_with(*lexeme))
        .copied()
}
