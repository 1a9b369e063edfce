//! Annotation argument values.

use crate::types::{ClassRef, Type};
use serde::{Deserialize, Serialize};

/// A constant usable as an annotation member value.
///
/// `Char` and `Null` are representable so upstream models can hand them
/// over, but the literal serializer rejects them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Literal {
    Array(Vec<Literal>),
    /// Class literal, `Foo.class`.
    Class(Type),
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Enum { declaring: ClassRef, constant: String },
    Str(String),
    Char(char),
    Null,
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Literal::Str(value.into())
    }

    pub fn enum_constant(declaring: ClassRef, constant: impl Into<String>) -> Self {
        Literal::Enum {
            declaring,
            constant: constant.into(),
        }
    }

    pub fn class_of(ty: Type) -> Self {
        Literal::Class(ty)
    }

    /// Short description of the value's shape for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Literal::Array(_) => "array",
            Literal::Class(_) => "class",
            Literal::Bool(_) => "boolean",
            Literal::Byte(_) => "byte",
            Literal::Short(_) => "short",
            Literal::Int(_) => "int",
            Literal::Long(_) => "long",
            Literal::Float(_) => "float",
            Literal::Double(_) => "double",
            Literal::Enum { .. } => "enum",
            Literal::Str(_) => "string",
            Literal::Char(_) => "char",
            Literal::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// Constant identity as Java's `equals` sees it.
    ///
    /// Floating-point values compare by bit pattern, so `NaN` equals `NaN`
    /// and `-0.0` differs from `0.0`. Arrays compare element by element.
    pub fn same_constant(&self, other: &Literal) -> bool {
        match (self, other) {
            (Literal::Float(a), Literal::Float(b)) => a.to_bits() == b.to_bits(),
            (Literal::Double(a), Literal::Double(b)) => a.to_bits() == b.to_bits(),
            (Literal::Array(a), Literal::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_constant(y))
            }
            _ => self == other,
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Long(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Double(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(values: Vec<T>) -> Self {
        Literal::Array(values.into_iter().map(Into::into).collect())
    }
}
