//! Expression Visitor
//!
//! One operation per [`Expr`](crate::Expr) variant, all returning the
//! visitor's chosen `Output`. [`Expr::accept`](crate::Expr::accept) picks the
//! operation with an exhaustive `match`, so adding a variant breaks every
//! visitor at compile time.
//!
//! # Traversal order
//!
//! Visitors that recurse are expected to visit a unary operand before
//! building the unary result, and a binary node's left operand, then its
//! right operand, then combine. Pure visitors don't observe the order;
//! visitors with side effects rely on it.
//!
//! # Example
//!
//! ```text
//! struct Depth;
//!
//! impl Visitor for Depth {
//!     type Output = usize;
//!
//!     fn visit_literal(&mut self, _: &Literal) -> usize { 1 }
//!     fn visit_ident(&mut self, _: &Ident) -> usize { 1 }
//!     fn visit_unary(&mut self, unary: &Unary) -> usize {
//!         unary.expr.accept(self) + 1
//!     }
//!     fn visit_binary(&mut self, binary: &Binary) -> usize {
//!         let left = binary.left.accept(self);
//!         let right = binary.right.accept(self);
//!         left.max(right) + 1
//!     }
//! }
//! ```

use crate::ast::{Binary, Ident, Literal, Unary};

/// Expression visitor.
///
/// The visitor may mutate its own state; the tree is borrowed immutably.
pub trait Visitor {
    /// Result produced for every node.
    type Output;

    fn visit_literal(&mut self, literal: &Literal) -> Self::Output;

    fn visit_ident(&mut self, ident: &Ident) -> Self::Output;

    /// Visit a unary node. Implementations that recurse visit
    /// `unary.expr` first.
    fn visit_unary(&mut self, unary: &Unary) -> Self::Output;

    /// Visit a binary node. Implementations that recurse visit
    /// `binary.left` before `binary.right`.
    fn visit_binary(&mut self, binary: &Binary) -> Self::Output;
}
