use super::JavaWriter;
use crate::error::Result;
use crate::sink::TextSink;
use javagen_model::{Type, TypeRef};

const IMPORT: &str = "import ";
const IMPORT_STATIC: &str = "import static ";

impl<'a, S: TextSink + ?Sized> JavaWriter<'a, S> {
    // =========================================================================
    // Imports
    // =========================================================================

    /// One `import T;` line per type, then a blank line.
    pub fn imports(&mut self, types: &[Type]) -> Result<&mut Self> {
        for ty in types {
            let name = ty.full_name();
            self.names.register_class(&name);
            self.line(&format!("{IMPORT}{name};"))?;
        }
        self.nl()
    }

    /// One `import a.b.C;` line per qualified name, then a blank line.
    pub fn import_classes(&mut self, names: &[&str]) -> Result<&mut Self> {
        for name in names {
            self.names.register_class(name);
            self.line(&format!("{IMPORT}{name};"))?;
        }
        self.nl()
    }

    /// One `import pkg.*;` line per package, then a blank line.
    pub fn import_packages(&mut self, packages: &[&str]) -> Result<&mut Self> {
        for package in packages {
            self.names.register_package(package);
            self.line(&format!("{IMPORT}{package}.*;"))?;
        }
        self.nl()
    }

    /// One `import static T.*;` line per type.
    ///
    /// Static imports bring in members, not types, so the registry is left
    /// untouched and no blank line follows.
    pub fn static_imports(&mut self, types: &[Type]) -> Result<&mut Self> {
        for ty in types {
            self.line(&format!("{IMPORT_STATIC}{}.*;", ty.full_name()))?;
        }
        Ok(self)
    }
}
