//! Expression tree documents.
//!
//! [`ExprXml`] turns an expression tree into an [`Element`] tree of the same
//! shape, [`Element::to_xml`] renders it as markup, and [`save`] writes it
//! to disk.
//!
//! ```text
//! let doc = ExprXml::document(&expr);
//! save(Path::new("expr.xml"), &doc)?;
//! ```

mod element;
mod expr_xml;
mod save;
mod writer;

pub use element::Element;
pub use expr_xml::ExprXml;
pub use save::{save, SaveError};
