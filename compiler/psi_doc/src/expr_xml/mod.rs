//! Expression-to-document conversion.
//!
//! | Node       | Element   | Attributes          | Children       |
//! |------------|-----------|---------------------|----------------|
//! | Literal    | `Literal` | `Value`, `Type`     | none           |
//! | Identifier | `Ident`   | `Name`, `Type`      | none           |
//! | Unary      | `Unary`   | `Op`                | operand        |
//! | Binary     | `Binary`  | `Op`, `Type`        | left, right    |
//!
//! `Type` is written as whatever tag the node carries, `unknown` included.

use psi_ir::{Binary, Expr, Ident, Literal, Unary, Visitor};
use tracing::trace;

use crate::Element;

/// Builds an [`Element`] tree mirroring an expression tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExprXml;

impl ExprXml {
    /// Convert a whole expression tree.
    pub fn document(expr: &Expr) -> Element {
        let element = expr.accept(&mut ExprXml);
        trace!(nodes = element.node_count(), "built expression document");
        element
    }
}

impl Visitor for ExprXml {
    type Output = Element;

    fn visit_literal(&mut self, literal: &Literal) -> Element {
        Element::new("Literal")
            .with_attr("Value", &literal.value.text)
            .with_attr("Type", literal.ty)
    }

    fn visit_ident(&mut self, ident: &Ident) -> Element {
        Element::new("Ident")
            .with_attr("Name", &ident.name)
            .with_attr("Type", ident.ty)
    }

    fn visit_unary(&mut self, unary: &Unary) -> Element {
        let operand = unary.expr.accept(self);
        Element::new("Unary")
            .with_child(operand)
            .with_attr("Op", &unary.op)
    }

    fn visit_binary(&mut self, binary: &Binary) -> Element {
        let left = binary.left.accept(self);
        let right = binary.right.accept(self);
        Element::new("Binary")
            .with_child(left)
            .with_child(right)
            .with_attr("Op", binary.op.kind)
            .with_attr("Type", binary.ty)
    }
}
