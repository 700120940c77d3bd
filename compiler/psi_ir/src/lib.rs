//! PSI IR - tokens and expression trees
//!
//! This crate contains the data shared by the PSI front end:
//! - Token kinds, laid out in keyword/operator/punctuation/other ranges
//! - Tokens and their canonical rendering
//! - The operator lexeme table consulted by the scanner
//! - Expression nodes and the [`Visitor`] trait used to traverse them

pub mod ast;
mod token;
pub mod visitor;

pub use ast::{Binary, Expr, Ident, Literal, Type, Unary};
pub use token::{
    match_lexeme, Category, Token, TokenKind, END_KEYWORDS, END_OPERATORS, END_PUNCTUATION,
    LEXEMES,
};
pub use visitor::Visitor;
