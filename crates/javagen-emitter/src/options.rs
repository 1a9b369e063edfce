//! Writer configuration.
//!
//! Options deserialize from JSON so a generator can keep them next to its
//! other settings:
//!
//! ```json
//! { "indentWidth": 4, "implicitPackages": ["java.lang"] }
//! ```

use javagen_model::{IMPLICIT_PACKAGE, NameRegistry};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriterOptions {
    /// Spaces per nesting level. Ignored when `use_tabs` is set.
    pub indent_width: usize,
    /// Indent with one tab per level.
    pub use_tabs: bool,
    /// Packages visible without an import.
    pub implicit_packages: Vec<String>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            indent_width: 2,
            use_tabs: false,
            implicit_packages: vec![IMPLICIT_PACKAGE.to_string()],
        }
    }
}

impl WriterOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Text written once per indentation level.
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }

    pub(crate) fn name_registry(&self) -> NameRegistry {
        NameRegistry::with_implicit_packages(self.implicit_packages.iter().cloned())
    }
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
