use crate::types::Type;
use serde::{Deserialize, Serialize};

/// A method or constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Parameter {
            name: name.into(),
            ty,
        }
    }

    /// Project a collection of caller values into parameters.
    pub fn project<T, I, F>(items: I, to_parameter: F) -> Vec<Parameter>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Parameter,
    {
        items.into_iter().map(to_parameter).collect()
    }
}
