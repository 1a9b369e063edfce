//! Name Registry
//!
//! Tracks which type names are unambiguous in the compilation unit being
//! written: explicitly imported classes and wildcard-imported packages.
//! A type whose qualified name or package is known prints by its simple
//! name; everything else prints fully qualified.
//!
//! The registry only grows. It does not detect two imports that share a
//! simple name (`java.util.List` and `java.awt.List`); callers feeding it
//! from a trusted model are expected not to produce such pairs.

use crate::types::TypeRef;
use rustc_hash::FxHashSet;

/// The package every compilation unit sees without an import.
pub const IMPLICIT_PACKAGE: &str = "java.lang";

#[derive(Clone, Debug, Default)]
pub struct NameRegistry {
    classes: FxHashSet<String>,
    packages: FxHashSet<String>,
}

impl NameRegistry {
    /// Registry seeded with `java.lang`.
    pub fn new() -> Self {
        Self::with_implicit_packages([IMPLICIT_PACKAGE])
    }

    /// Registry with nothing visible; every packaged type renders qualified.
    pub fn qualified() -> Self {
        Self::default()
    }

    pub fn with_implicit_packages<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameRegistry {
            classes: FxHashSet::default(),
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    /// Make a fully-qualified class name visible by its simple name.
    pub fn register_class(&mut self, qualified_name: &str) {
        if self.classes.insert(qualified_name.to_string()) {
            tracing::debug!(class = qualified_name, "registered class import");
        }
    }

    /// Make every member of `package` visible by its simple name.
    pub fn register_package(&mut self, package: &str) {
        if self.packages.insert(package.to_string()) {
            tracing::debug!(package, "registered package import");
        }
    }

    pub fn is_class_registered(&self, qualified_name: &str) -> bool {
        self.classes.contains(qualified_name)
    }

    pub fn is_package_registered(&self, package: &str) -> bool {
        self.packages.contains(package)
    }

    /// Whether `ty` can be written by its simple name.
    pub fn is_imported(&self, ty: &dyn TypeRef) -> bool {
        let package = ty.package_name();
        package.is_empty()
            || self.packages.contains(package)
            || self.classes.contains(&ty.full_name())
    }

    /// Simple name when imported, fully-qualified name otherwise.
    ///
    /// Generic arguments are not part of the result; see [`TypeRef::render`].
    pub fn resolve(&self, ty: &dyn TypeRef) -> String {
        if self.is_imported(ty) {
            ty.simple_name().to_string()
        } else {
            ty.full_name()
        }
    }

    pub fn imported_classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn imported_packages(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../tests/names.rs"]
mod tests;
