//! Java declaration writer for the javagen workspace.
//!
//! This crate turns structured declarations into Java source text:
//! - Text sinks the writer emits through (`TextSink`, `StringSink`, `IoSink`)
//! - Annotation literal rendering (`LiteralSerializer`)
//! - Open-declaration tracking (`ScopeStack`)
//! - The writer itself (`JavaWriter`) and its configuration (`WriterOptions`)

pub mod error;
pub use error::{Result, WriteError};

// Line-oriented output targets
pub mod sink;
pub use sink::{IoSink, StringSink, TextSink};

pub mod options;
pub use options::WriterOptions;

pub mod literals;
pub use literals::{LiteralSerializer, escape_java};

pub mod scope;
pub use scope::{MemberKind, Scope, ScopeStack, TypeKind};

pub mod writer;
pub use writer::{JavaWriter, Modifiers};
