use super::JavaWriter;
use crate::error::Result;
use crate::sink::TextSink;
use bitflags::bitflags;
use javagen_model::Type;

bitflags! {
    /// Field modifiers. Rendered in the canonical Java order regardless of
    /// how the set was built.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
    }
}

impl Modifiers {
    /// Keywords followed by a space each, e.g. `private static final `.
    pub fn prefix(self) -> String {
        const ORDER: [(Modifiers, &str); 5] = [
            (Modifiers::PUBLIC, "public "),
            (Modifiers::PROTECTED, "protected "),
            (Modifiers::PRIVATE, "private "),
            (Modifiers::STATIC, "static "),
            (Modifiers::FINAL, "final "),
        ];
        ORDER
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
            .collect()
    }
}

impl<'a, S: TextSink + ?Sized> JavaWriter<'a, S> {
    // =========================================================================
    // Fields
    // =========================================================================

    /// `[modifiers ]Type name[ = value];` followed by a blank line.
    ///
    /// `value` is written verbatim; it must already be valid Java.
    pub fn field_declaration(
        &mut self,
        modifiers: Modifiers,
        ty: &Type,
        name: &str,
        value: Option<&str>,
    ) -> Result<&mut Self> {
        let mut text = modifiers.prefix();
        text.push_str(&self.generic_name(true, ty));
        text.push(' ');
        text.push_str(name);
        if let Some(value) = value {
            text.push_str(" = ");
            text.push_str(value);
        }
        text.push(';');
        self.line(&text)?.nl()
    }

    /// Package-private field.
    pub fn field(&mut self, ty: &Type, name: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::empty(), ty, name, None)
    }

    pub fn private_field(&mut self, ty: &Type, name: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PRIVATE, ty, name, None)
    }

    pub fn private_final(&mut self, ty: &Type, name: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PRIVATE | Modifiers::FINAL, ty, name, None)
    }

    pub fn private_final_with(&mut self, ty: &Type, name: &str, value: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PRIVATE | Modifiers::FINAL, ty, name, Some(value))
    }

    pub fn private_static_final(
        &mut self,
        ty: &Type,
        name: &str,
        value: &str,
    ) -> Result<&mut Self> {
        let modifiers = Modifiers::PRIVATE | Modifiers::STATIC | Modifiers::FINAL;
        self.field_declaration(modifiers, ty, name, Some(value))
    }

    pub fn protected_field(&mut self, ty: &Type, name: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PROTECTED, ty, name, None)
    }

    pub fn protected_final(&mut self, ty: &Type, name: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PROTECTED | Modifiers::FINAL, ty, name, None)
    }

    pub fn protected_final_with(
        &mut self,
        ty: &Type,
        name: &str,
        value: &str,
    ) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PROTECTED | Modifiers::FINAL, ty, name, Some(value))
    }

    pub fn public_field(&mut self, ty: &Type, name: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PUBLIC, ty, name, None)
    }

    pub fn public_field_with(&mut self, ty: &Type, name: &str, value: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PUBLIC, ty, name, Some(value))
    }

    pub fn public_final(&mut self, ty: &Type, name: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PUBLIC | Modifiers::FINAL, ty, name, None)
    }

    pub fn public_final_with(&mut self, ty: &Type, name: &str, value: &str) -> Result<&mut Self> {
        self.field_declaration(Modifiers::PUBLIC | Modifiers::FINAL, ty, name, Some(value))
    }

    pub fn public_static_final(
        &mut self,
        ty: &Type,
        name: &str,
        value: &str,
    ) -> Result<&mut Self> {
        let modifiers = Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL;
        self.field_declaration(modifiers, ty, name, Some(value))
    }
}
