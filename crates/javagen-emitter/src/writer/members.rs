use super::{COMMA, JavaWriter};
use crate::error::Result;
use crate::scope::MemberKind;
use crate::sink::TextSink;
use javagen_model::{Parameter, Type, TypeRef};

const PUBLIC: &str = "public ";
const PUBLIC_STATIC: &str = "public static ";

impl<'a, S: TextSink + ?Sized> JavaWriter<'a, S> {
    // =========================================================================
    // Methods and constructors
    // =========================================================================

    /// Open `public ReturnType name(params) {`.
    ///
    /// Callers holding some other collection project it first, e.g. with
    /// [`Parameter::project`].
    pub fn begin_public_method(
        &mut self,
        return_type: &Type,
        name: &str,
        params: &[Parameter],
    ) -> Result<&mut Self> {
        self.begin_method(PUBLIC, return_type, name, params)
    }

    /// Open `public static ReturnType name(params) {`.
    pub fn begin_static_method(
        &mut self,
        return_type: &Type,
        name: &str,
        params: &[Parameter],
    ) -> Result<&mut Self> {
        self.begin_method(PUBLIC_STATIC, return_type, name, params)
    }

    /// Open `public Enclosing(params) {`, named after the nearest open type.
    pub fn begin_constructor(&mut self, params: &[Parameter]) -> Result<&mut Self> {
        let name = self.scopes.current_enclosing_type_name()?.to_string();
        self.scopes.push_member(MemberKind::Constructor)?;
        tracing::trace!(constructor = %name, params = params.len(), "begin constructor");
        let header = format!("{PUBLIC}{name}({}) {{", self.params(params));
        self.open_member(&header)
    }

    fn begin_method(
        &mut self,
        modifiers: &str,
        return_type: &Type,
        name: &str,
        params: &[Parameter],
    ) -> Result<&mut Self> {
        self.scopes.push_member(MemberKind::Method)?;
        tracing::trace!(method = name, params = params.len(), "begin method");
        let header = format!(
            "{modifiers}{} {name}({}) {{",
            return_type.render(true, &self.names),
            self.params(params)
        );
        self.open_member(&header)
    }

    fn open_member(&mut self, header: &str) -> Result<&mut Self> {
        self.line(header)?;
        Ok(self.go_in())
    }

    fn params(&self, params: &[Parameter]) -> String {
        params
            .iter()
            .map(|p| format!("{} {}", p.ty.render(true, &self.names), p.name))
            .collect::<Vec<_>>()
            .join(COMMA)
    }
}
