//! Annotation Model
//!
//! An annotation instance exposes its members explicitly: name, current
//! value and declared default. The writer compares the two to decide which
//! members to print, so no runtime reflection is involved.

use crate::literal::Literal;
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Error raised while reading an annotation's members.
pub type MemberAccessError = Box<dyn Error + Send + Sync + 'static>;

/// One value-producing member of an annotation type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMember {
    pub name: String,
    pub value: Literal,
    /// Declared default; `None` when the member is mandatory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Literal>,
}

impl AnnotationMember {
    pub fn new(name: impl Into<String>, value: impl Into<Literal>) -> Self {
        AnnotationMember {
            name: name.into(),
            value: value.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Literal>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether the live value equals the declared default.
    ///
    /// See [`Literal::same_constant`] for how values compare.
    pub fn is_default(&self) -> bool {
        self.default
            .as_ref()
            .is_some_and(|default| default.same_constant(&self.value))
    }
}

/// Capability interface for a live annotation instance.
pub trait Annotation {
    /// The annotation's own type, printed after `@`.
    fn annotation_type(&self) -> &Type;

    /// Declared members in declaration order.
    fn members(&self) -> Result<Vec<AnnotationMember>, MemberAccessError>;
}

/// Plain-data annotation instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationData {
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub members: Vec<AnnotationMember>,
}

impl AnnotationData {
    pub fn new(ty: Type) -> Self {
        AnnotationData {
            ty,
            members: Vec::new(),
        }
    }

    pub fn member(mut self, member: AnnotationMember) -> Self {
        self.members.push(member);
        self
    }
}

impl Annotation for AnnotationData {
    fn annotation_type(&self) -> &Type {
        &self.ty
    }

    fn members(&self) -> Result<Vec<AnnotationMember>, MemberAccessError> {
        Ok(self.members.clone())
    }
}

#[cfg(test)]
#[path = "../tests/annotation.rs"]
mod tests;
