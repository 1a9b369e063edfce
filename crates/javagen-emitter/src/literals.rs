//! Literal Serializer
//!
//! Renders annotation member values as Java constant expressions. Only
//! annotation arguments come through here; field initializers are
//! caller-supplied text and are written verbatim.

use crate::error::{Result, WriteError};
use javagen_model::{Literal, NameRegistry};
use std::fmt::Write;

pub struct LiteralSerializer<'a> {
    names: &'a NameRegistry,
}

impl<'a> LiteralSerializer<'a> {
    pub fn new(names: &'a NameRegistry) -> Self {
        LiteralSerializer { names }
    }

    pub fn render(&self, value: &Literal) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out, value)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String, value: &Literal) -> Result<()> {
        match value {
            Literal::Array(elements) => {
                out.push('{');
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.render_into(out, element)?;
                }
                out.push('}');
            }
            Literal::Class(ty) => {
                out.push_str(&self.names.resolve(ty));
                out.push_str(".class");
            }
            Literal::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Literal::Byte(n) => push_display(out, n),
            Literal::Short(n) => push_display(out, n),
            Literal::Int(n) => push_display(out, n),
            Literal::Long(n) => {
                push_display(out, n);
                out.push('L');
            }
            Literal::Float(f) => out.push_str(&format_float(*f)),
            Literal::Double(d) => out.push_str(&format_double(*d)),
            Literal::Enum {
                declaring,
                constant,
            } => {
                // Enum constants stay qualified regardless of imports.
                if !declaring.package.is_empty() {
                    out.push_str(&declaring.package);
                    out.push('.');
                }
                out.push_str(&declaring.name);
                out.push('.');
                out.push_str(constant);
            }
            Literal::Str(s) => {
                out.push('"');
                out.push_str(&escape_java(s).replace("\\/", "/"));
                out.push('"');
            }
            Literal::Char(c) => {
                return Err(WriteError::UnsupportedLiteral(format!(
                    "{} {:?}",
                    value.shape(),
                    c
                )));
            }
            Literal::Null => {
                return Err(WriteError::UnsupportedLiteral(value.shape().to_string()));
            }
        }
        Ok(())
    }
}

fn push_display(out: &mut String, value: &dyn std::fmt::Display) {
    let _ = write!(out, "{value}");
}

fn format_double(value: f64) -> String {
    if value.is_nan() {
        "Double.NaN".to_string()
    } else if value == f64::INFINITY {
        "Double.POSITIVE_INFINITY".to_string()
    } else if value == f64::NEG_INFINITY {
        "Double.NEGATIVE_INFINITY".to_string()
    } else {
        // Debug keeps a fractional part on whole numbers (`1.0`).
        format!("{value:?}")
    }
}

fn format_float(value: f32) -> String {
    if value.is_nan() {
        "Float.NaN".to_string()
    } else if value == f32::INFINITY {
        "Float.POSITIVE_INFINITY".to_string()
    } else if value == f32::NEG_INFINITY {
        "Float.NEGATIVE_INFINITY".to_string()
    } else {
        format!("{value:?}f")
    }
}

/// Escape text for a Java string literal body.
///
/// Quotes, backslashes and forward slashes get a backslash; the short
/// control escapes (`\b \t \n \f \r`) are used where they exist; every other
/// control character and everything above ASCII becomes `\uXXXX`, one
/// escape per UTF-16 unit.
pub fn escape_java(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 || (c as u32) > 0x7f => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/literals.rs"]
mod tests;
