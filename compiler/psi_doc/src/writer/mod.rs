//! XML Writer
//!
//! Renders an [`Element`] tree as indented markup:
//!
//! ```text
//! <Binary Op="ADD" Type="int">
//!   <Literal Value="1" Type="int" />
//!   <Literal Value="2" Type="int" />
//! </Binary>
//! ```
//!
//! Two spaces of indentation per level, attributes in insertion order,
//! childless elements self-close, no trailing newline.

use std::fmt::{self, Write};

use crate::Element;

const INDENT: &str = "  ";

impl Element {
    /// Serialize this element and its subtree as XML text.
    pub fn to_xml(&self) -> String {
        self.to_string()
    }

    fn write_xml(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        write_indent(out, depth)?;
        write!(out, "<{}", self.name())?;
        for (key, value) in self.attrs() {
            write!(out, " {key}=\"")?;
            write_escaped(out, value)?;
            out.write_char('"')?;
        }

        if self.children().is_empty() {
            return out.write_str(" />");
        }

        out.write_char('>')?;
        for child in self.children() {
            out.write_char('\n')?;
            child.write_xml(out, depth + 1)?;
        }
        out.write_char('\n')?;
        write_indent(out, depth)?;
        write!(out, "</{}>", self.name())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_xml(f, 0)
    }
}

fn write_indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

/// Escape an attribute value.
///
/// Tab, LF and CR are written as character references; readers normalize
/// literal whitespace in attribute values to spaces.
fn write_escaped(out: &mut impl Write, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\t' => out.write_str("&#x9;")?,
            '\n' => out.write_str("&#xA;")?,
            '\r' => out.write_str("&#xD;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}
