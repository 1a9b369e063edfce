//! javagen: write Java source from structured declarations.
//!
//! The workspace is split in two crates, re-exported here:
//! - `javagen-model`: type references, the name registry, parameters and
//!   annotation values
//! - `javagen-emitter`: text sinks, the literal serializer, the scope stack
//!   and `JavaWriter`
//!
//! ```ignore
//! use javagen::{JavaWriter, StringSink, Type};
//!
//! let mut sink = StringSink::new();
//! let mut w = JavaWriter::new(&mut sink);
//! w.package_decl("com.example")?
//!     .begin_class(&Type::named("com.example.Point"), None, &[])?
//!     .private_final(&Type::int(), "x")?
//!     .end()?;
//! ```

pub use javagen_model as model;
pub use javagen_model::{
    Annotation, AnnotationData, AnnotationMember, ClassRef, IMPLICIT_PACKAGE, Literal,
    MemberAccessError, NameRegistry, Parameter, Primitive, Type, TypeRef, TypeVariable, Wildcard,
};

pub use javagen_emitter as emitter;
pub use javagen_emitter::{
    IoSink, JavaWriter, LiteralSerializer, MemberKind, Modifiers, Result, Scope, ScopeStack,
    StringSink, TextSink, TypeKind, WriteError, WriterOptions, escape_java,
};

// Subscriber bootstrap (JAVAGEN_LOG / JAVAGEN_LOG_FORMAT)
pub mod tracing_config;
