//! Type References
//!
//! The writer never inspects a type's structure directly. It asks a
//! [`TypeRef`] for its simple name, its package, and a rendering against the
//! current [`NameRegistry`]. [`Type`] is the concrete model shipped with the
//! crate: primitives, classes with generic arguments, arrays, type variables
//! and wildcards.
//!
//! # Rendering position
//!
//! `render(as_parameter, ..)` distinguishes two positions:
//!
//! - usage (`as_parameter = true`): fields, parameters, return types,
//!   supertypes. Type variables print as their bare name.
//! - declaration (`as_parameter = false`): the header of a declared type.
//!   Type variables print with their bound, `T extends Number`.

use crate::names::NameRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type as the writer sees it.
pub trait TypeRef {
    /// Unqualified name, e.g. `String` or `Map.Entry`.
    fn simple_name(&self) -> &str;

    /// Declaring package; empty for primitives, type variables and the
    /// default package.
    fn package_name(&self) -> &str;

    /// Package-qualified name.
    fn full_name(&self) -> String {
        let package = self.package_name();
        if package.is_empty() {
            self.simple_name().to_string()
        } else {
            format!("{}.{}", package, self.simple_name())
        }
    }

    /// Spell the type for the given position against the registry state.
    fn render(&self, as_parameter: bool, names: &NameRegistry) -> String;
}

// =============================================================================
// Primitives
// =============================================================================

/// Java primitive types, plus `void` for return positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Void,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Char => "char",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

// =============================================================================
// Classes, variables, wildcards
// =============================================================================

/// A class or interface reference with optional generic arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassRef {
    pub package: String,
    /// Simple name; nested types keep their outer prefix (`Map.Entry`).
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Type>,
}

impl ClassRef {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        ClassRef {
            package: package.into(),
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Split a qualified name at its last dot.
    ///
    /// `com.example.Foo` becomes package `com.example`, name `Foo`. A name
    /// without dots lands in the default package.
    pub fn parse(qualified: &str) -> Self {
        match qualified.rfind('.') {
            Some(dot) => ClassRef::new(&qualified[..dot], &qualified[dot + 1..]),
            None => ClassRef::new("", qualified),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<Type>) -> Self {
        self.arguments = arguments;
        self
    }
}

/// A type variable such as `T` or `E extends Comparable<E>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeVariable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<Box<Type>>,
}

/// Generic wildcard argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Wildcard {
    Unbounded,
    Extends(Box<Type>),
    Super(Box<Type>),
}

/// Concrete type model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Type {
    Primitive(Primitive),
    Class(ClassRef),
    Array(Box<Type>),
    Variable(TypeVariable),
    Wildcard(Wildcard),
}

impl Type {
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Type::Class(ClassRef::new(package, name))
    }

    /// Class type from a qualified name, see [`ClassRef::parse`].
    pub fn named(qualified: &str) -> Self {
        Type::Class(ClassRef::parse(qualified))
    }

    pub fn generic(package: impl Into<String>, name: impl Into<String>, args: Vec<Type>) -> Self {
        Type::Class(ClassRef::new(package, name).with_arguments(args))
    }

    pub fn array_of(component: Type) -> Self {
        Type::Array(Box::new(component))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Type::Variable(TypeVariable {
            name: name.into(),
            bound: None,
        })
    }

    pub fn bounded_variable(name: impl Into<String>, bound: Type) -> Self {
        Type::Variable(TypeVariable {
            name: name.into(),
            bound: Some(Box::new(bound)),
        })
    }

    pub fn wildcard() -> Self {
        Type::Wildcard(Wildcard::Unbounded)
    }

    pub fn extends(bound: Type) -> Self {
        Type::Wildcard(Wildcard::Extends(Box::new(bound)))
    }

    pub fn super_of(bound: Type) -> Self {
        Type::Wildcard(Wildcard::Super(Box::new(bound)))
    }

    pub fn void() -> Self {
        Type::Primitive(Primitive::Void)
    }

    pub fn boolean() -> Self {
        Type::Primitive(Primitive::Boolean)
    }

    pub fn int() -> Self {
        Type::Primitive(Primitive::Int)
    }

    pub fn long() -> Self {
        Type::Primitive(Primitive::Long)
    }

    pub fn double() -> Self {
        Type::Primitive(Primitive::Double)
    }

    pub fn string() -> Self {
        Type::class("java.lang", "String")
    }

    pub fn object() -> Self {
        Type::class("java.lang", "Object")
    }

    pub fn list(element: Type) -> Self {
        Type::generic("java.util", "List", vec![element])
    }

    pub fn set(element: Type) -> Self {
        Type::generic("java.util", "Set", vec![element])
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::generic("java.util", "Map", vec![key, value])
    }

    /// Generic arguments of a class type; empty for everything else.
    pub fn arguments(&self) -> &[Type] {
        match self {
            Type::Class(class) => &class.arguments,
            _ => &[],
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    /// Name of the declared type in its own header: simple name plus the
    /// declared type variables with their bounds.
    pub fn declaration_name(&self, names: &NameRegistry) -> String {
        let mut out = self.simple_name().to_string();
        push_arguments(&mut out, self.arguments(), false, names);
        out
    }
}

fn push_arguments(out: &mut String, args: &[Type], as_parameter: bool, names: &NameRegistry) {
    if args.is_empty() {
        return;
    }
    out.push('<');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&arg.render(as_parameter, names));
    }
    out.push('>');
}

impl TypeRef for Type {
    fn simple_name(&self) -> &str {
        match self {
            Type::Primitive(p) => p.keyword(),
            Type::Class(class) => &class.name,
            Type::Array(component) => component.simple_name(),
            Type::Variable(var) => &var.name,
            Type::Wildcard(_) => "?",
        }
    }

    fn package_name(&self) -> &str {
        match self {
            Type::Class(class) => &class.package,
            Type::Array(component) => component.package_name(),
            Type::Primitive(_) | Type::Variable(_) | Type::Wildcard(_) => "",
        }
    }

    fn render(&self, as_parameter: bool, names: &NameRegistry) -> String {
        match self {
            Type::Primitive(p) => p.keyword().to_string(),
            Type::Class(class) => {
                let mut out = names.resolve(self);
                // Generic arguments are always in usage position.
                push_arguments(&mut out, &class.arguments, true, names);
                out
            }
            Type::Array(component) => format!("{}[]", component.render(as_parameter, names)),
            Type::Variable(var) => match &var.bound {
                Some(bound) if !as_parameter => {
                    format!("{} extends {}", var.name, bound.render(true, names))
                }
                _ => var.name.clone(),
            },
            Type::Wildcard(Wildcard::Unbounded) => "?".to_string(),
            Type::Wildcard(Wildcard::Extends(bound)) => {
                format!("? extends {}", bound.render(true, names))
            }
            Type::Wildcard(Wildcard::Super(bound)) => {
                format!("? super {}", bound.render(true, names))
            }
        }
    }
}

impl fmt::Display for Type {
    /// Fully-qualified spelling, independent of any registry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true, &NameRegistry::qualified()))
    }
}

impl From<ClassRef> for Type {
    fn from(class: ClassRef) -> Self {
        Type::Class(class)
    }
}

impl From<Primitive> for Type {
    fn from(primitive: Primitive) -> Self {
        Type::Primitive(primitive)
    }
}

#[cfg(test)]
#[path = "../tests/types.rs"]
mod tests;
