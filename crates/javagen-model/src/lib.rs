//! Model types for the javagen Java source writer.
//!
//! This crate provides the inputs the writer consumes:
//! - Type references (`TypeRef`, `Type`, `ClassRef`, `Primitive`)
//! - The name registry deciding short vs. qualified spelling (`NameRegistry`)
//! - Method parameters (`Parameter`)
//! - Annotation instances and their constant values (`Annotation`, `Literal`)

// Type references and the concrete type model
pub mod types;
pub use types::{ClassRef, Primitive, Type, TypeRef, TypeVariable, Wildcard};

// Imported classes and packages of one compilation unit
pub mod names;
pub use names::{IMPLICIT_PACKAGE, NameRegistry};

pub mod parameter;
pub use parameter::Parameter;

// Annotation values and the member capability interface
pub mod literal;
pub use literal::Literal;

pub mod annotation;
pub use annotation::{Annotation, AnnotationData, AnnotationMember, MemberAccessError};
