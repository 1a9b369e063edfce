//! Java Declaration Writer
//!
//! `JavaWriter` turns an ordered sequence of `begin_* / content / end` calls
//! into Java source text. It owns the per-file session state: the name
//! registry, the scope stack and the indentation level. The sink is borrowed
//! for the lifetime of the session and never closed.
//!
//! ```ignore
//! let mut sink = StringSink::new();
//! let mut w = JavaWriter::new(&mut sink);
//! w.package_decl("p")?
//!     .begin_class(&Type::named("p.C"), None, &[])?
//!     .private_field(&Type::string(), "x")?
//!     .end()?;
//! // package p;
//! //
//! // public class C {
//! //
//! //   private String x;
//! //
//! // }
//! ```
//!
//! Submodules add the rest of the surface:
//! - `imports`: package, class and static imports
//! - `members`: methods and constructors
//! - `fields`: field declarations
//! - `annotations`: annotation lines

mod annotations;
mod fields;
mod imports;
mod members;

pub use fields::Modifiers;

use crate::error::Result;
use crate::options::WriterOptions;
use crate::scope::{ScopeStack, TypeKind};
use crate::sink::TextSink;
use javagen_model::{NameRegistry, Type, TypeRef};

const PACKAGE: &str = "package ";
const PUBLIC_CLASS: &str = "public class ";
const PUBLIC_INTERFACE: &str = "public interface ";
const EXTENDS: &str = " extends ";
const IMPLEMENTS: &str = " implements ";
const COMMA: &str = ", ";

pub struct JavaWriter<'a, S: TextSink + ?Sized> {
    sink: &'a mut S,
    names: NameRegistry,
    scopes: ScopeStack,
    indent: usize,
}

impl<'a, S: TextSink + ?Sized> JavaWriter<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self::with_options(sink, &WriterOptions::default())
    }

    pub fn with_options(sink: &'a mut S, options: &WriterOptions) -> Self {
        sink.set_indent_unit(&options.indent_unit());
        sink.set_indent(0);
        JavaWriter {
            sink,
            names: options.name_registry(),
            scopes: ScopeStack::new(),
            indent: 0,
        }
    }

    /// Current registry state.
    pub fn names(&self) -> &NameRegistry {
        &self.names
    }

    /// Current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Number of open declarations.
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Spell `ty` against the current imports without writing it.
    pub fn generic_name(&self, as_parameter: bool, ty: &Type) -> String {
        ty.render(as_parameter, &self.names)
    }

    /// Spell `ty` without generic arguments.
    pub fn raw_name(&self, ty: &Type) -> String {
        self.names.resolve(ty)
    }

    // =========================================================================
    // Output Helpers (delegate to the sink)
    // =========================================================================

    fn append(&mut self, text: &str) -> Result<&mut Self> {
        self.sink.append_raw(text)?;
        Ok(self)
    }

    /// Terminate the current line; on an empty line this writes a blank line.
    pub fn nl(&mut self) -> Result<&mut Self> {
        self.sink.start_new_line()?;
        Ok(self)
    }

    /// Write one line at the current indentation.
    pub fn line(&mut self, text: &str) -> Result<&mut Self> {
        self.append(text)?.nl()
    }

    pub fn lines(&mut self, lines: &[&str]) -> Result<&mut Self> {
        for line in lines {
            self.line(line)?;
        }
        Ok(self)
    }

    fn go_in(&mut self) -> &mut Self {
        self.indent += 1;
        self.sink.set_indent(self.indent);
        self
    }

    fn go_out(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self.sink.set_indent(self.indent);
        self
    }

    fn type_list(&self, types: &[Type]) -> String {
        types
            .iter()
            .map(|ty| ty.render(true, &self.names))
            .collect::<Vec<_>>()
            .join(COMMA)
    }

    // =========================================================================
    // Compilation unit structure
    // =========================================================================

    /// `package name;` followed by a blank line.
    pub fn package_decl(&mut self, name: &str) -> Result<&mut Self> {
        self.names.register_package(name);
        self.line(&format!("{PACKAGE}{name};"))?.nl()
    }

    /// A `/** ... */` block, one ` * ` line per input line.
    pub fn javadoc(&mut self, lines: &[&str]) -> Result<&mut Self> {
        self.line("/**")?;
        for line in lines {
            self.line(&format!(" * {line}"))?;
        }
        self.line(" */")
    }

    /// Open `public class Name [extends S] [implements I, ..] {`.
    pub fn begin_class(
        &mut self,
        ty: &Type,
        superclass: Option<&Type>,
        interfaces: &[Type],
    ) -> Result<&mut Self> {
        self.register_own_package(ty);
        let mut header = format!("{PUBLIC_CLASS}{}", ty.declaration_name(&self.names));
        // Supertypes are type uses: variables in their arguments print bare.
        if let Some(superclass) = superclass {
            header.push_str(EXTENDS);
            header.push_str(&superclass.render(true, &self.names));
        }
        if !interfaces.is_empty() {
            header.push_str(IMPLEMENTS);
            header.push_str(&self.type_list(interfaces));
        }
        self.open_type(TypeKind::Class, ty, header)
    }

    /// Open `public interface Name [extends I, ..] {`.
    pub fn begin_interface(&mut self, ty: &Type, interfaces: &[Type]) -> Result<&mut Self> {
        self.register_own_package(ty);
        let mut header = format!("{PUBLIC_INTERFACE}{}", ty.declaration_name(&self.names));
        if !interfaces.is_empty() {
            header.push_str(EXTENDS);
            header.push_str(&self.type_list(interfaces));
        }
        self.open_type(TypeKind::Interface, ty, header)
    }

    fn register_own_package(&mut self, ty: &Type) {
        let package = ty.package_name();
        if !package.is_empty() {
            self.names.register_package(package);
        }
    }

    fn open_type(&mut self, kind: TypeKind, ty: &Type, mut header: String) -> Result<&mut Self> {
        header.push_str(" {");
        self.line(&header)?.nl()?;
        self.go_in();
        self.scopes.push_type(kind, ty.simple_name());
        Ok(self)
    }

    /// Close the innermost open declaration with `}` and a blank line.
    pub fn end(&mut self) -> Result<&mut Self> {
        self.scopes.pop()?;
        self.go_out();
        self.line("}")?.nl()
    }
}

#[cfg(test)]
#[path = "../../tests/writer.rs"]
mod tests;
