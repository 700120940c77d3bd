//! Expression trees.
//!
//! The parser builds an [`Expr`] tree out of owned, boxed nodes; there are
//! no back-pointers and nodes are never mutated after construction. The
//! `ty` fields start out as [`Type::Unknown`] and are filled in by semantic
//! analysis, which builds a new tree with [`Expr::with_type`].

use std::fmt;

use crate::visitor::Visitor;
use crate::Token;

/// Semantic type tag attached to expression nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Type {
    /// Not assigned yet.
    #[default]
    Unknown,
    Int,
    Real,
    Bool,
    String,
    Char,
    /// Assigned when analysis found the expression ill-typed.
    Error,
}

impl Type {
    pub const fn name(self) -> &'static str {
        match self {
            Type::Unknown => "unknown",
            Type::Int => "int",
            Type::Real => "real",
            Type::Bool => "bool",
            Type::String => "string",
            Type::Char => "char",
            Type::Error => "error",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal value (`42`, `3.5`, `"text"`, `'c'`, `true`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: Token,
    pub ty: Type,
}

/// A reference to a named variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub ty: Type,
}

/// A prefix operator applied to one operand (`-x`, `not done`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Unary {
    pub op: Token,
    pub expr: Box<Expr>,
}

/// An infix operator applied to two operands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Binary {
    pub op: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub ty: Type,
}

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Literal),
    Ident(Ident),
    Unary(Unary),
    Binary(Binary),
}

impl Expr {
    pub fn literal(value: Token) -> Self {
        Expr::Literal(Literal {
            value,
            ty: Type::Unknown,
        })
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(Ident {
            name: name.into(),
            ty: Type::Unknown,
        })
    }

    pub fn unary(op: Token, expr: Expr) -> Self {
        Expr::Unary(Unary {
            op,
            expr: Box::new(expr),
        })
    }

    pub fn binary(op: Token, left: Expr, right: Expr) -> Self {
        Expr::Binary(Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            ty: Type::Unknown,
        })
    }

    /// Return this node with its type tag replaced.
    ///
    /// Unary nodes carry no tag of their own and are returned unchanged.
    #[must_use]
    pub fn with_type(self, ty: Type) -> Self {
        match self {
            Expr::Literal(literal) => Expr::Literal(Literal { ty, ..literal }),
            Expr::Ident(ident) => Expr::Ident(Ident { ty, ..ident }),
            unary @ Expr::Unary(_) => unary,
            Expr::Binary(binary) => Expr::Binary(Binary { ty, ..binary }),
        }
    }

    /// Dispatch to the visitor operation for this node's variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(literal) => visitor.visit_literal(literal),
            Expr::Ident(ident) => visitor.visit_ident(ident),
            Expr::Unary(unary) => visitor.visit_unary(unary),
            Expr::Binary(binary) => visitor.visit_binary(binary),
        }
    }
}
