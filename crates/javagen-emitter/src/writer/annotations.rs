use super::{COMMA, JavaWriter};
use crate::error::{Result, WriteError};
use crate::literals::LiteralSerializer;
use crate::sink::TextSink;
use javagen_model::{Annotation, Type, TypeRef};

/// Member name that may be given positionally, `@T(v)`.
const VALUE: &str = "value";

impl<'a, S: TextSink + ?Sized> JavaWriter<'a, S> {
    // =========================================================================
    // Annotations
    // =========================================================================

    /// Write an annotation instance on its own line.
    ///
    /// A lone `value` member prints positionally. Otherwise members equal to
    /// their declared default (and null members) are left out; when nothing
    /// remains the annotation prints bare.
    #[tracing::instrument(level = "trace", skip_all, fields(annotation = %annotation.annotation_type().simple_name()))]
    pub fn annotation(&mut self, annotation: &dyn Annotation) -> Result<&mut Self> {
        let ty = annotation.annotation_type();
        let members = annotation
            .members()
            .map_err(|source| WriteError::MemberAccess {
                annotation: ty.full_name(),
                source,
            })?;

        let serializer = LiteralSerializer::new(&self.names);
        let mut text = format!("@{}", self.names.resolve(ty));
        if let [only] = members.as_slice()
            && only.name == VALUE
        {
            text.push('(');
            text.push_str(&serializer.render(&only.value)?);
            text.push(')');
        } else {
            let mut arguments = Vec::new();
            for member in &members {
                if member.value.is_null() || member.is_default() {
                    continue;
                }
                arguments.push(format!("{}={}", member.name, serializer.render(&member.value)?));
            }
            tracing::trace!(
                declared = members.len(),
                emitted = arguments.len(),
                "annotation members"
            );
            if !arguments.is_empty() {
                text.push('(');
                text.push_str(&arguments.join(COMMA));
                text.push(')');
            }
        }
        self.line(&text)
    }

    /// Bare marker annotation, `@T`.
    pub fn annotation_type(&mut self, ty: &Type) -> Result<&mut Self> {
        let text = format!("@{}", self.names.resolve(ty));
        self.line(&text)
    }

    /// `@SuppressWarnings("category")`.
    pub fn suppress_warnings(&mut self, category: &str) -> Result<&mut Self> {
        self.line(&format!("@SuppressWarnings(\"{category}\")"))
    }
}
