//! Scope Stack
//!
//! Open declarations, innermost last. Types (classes and interfaces) carry
//! their simple name; members (methods and constructors) carry the index of
//! the nearest enclosing type entry, so the constructor name is an explicit
//! lookup rather than a property of the stack top.

use crate::error::{Result, WriteError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Constructor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeScope {
    pub kind: TypeKind,
    pub simple_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberScope {
    pub kind: MemberKind,
    /// Stack index of the enclosing type entry.
    pub enclosing: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    Type(TypeScope),
    Member(MemberScope),
}

#[derive(Clone, Debug, Default)]
pub struct ScopeStack {
    entries: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scope: Scope) {
        tracing::trace!(depth = self.entries.len() + 1, ?scope, "push scope");
        self.entries.push(scope);
    }

    pub fn push_type(&mut self, kind: TypeKind, simple_name: impl Into<String>) {
        self.push(Scope::Type(TypeScope {
            kind,
            simple_name: simple_name.into(),
        }));
    }

    /// Open a member inside the nearest enclosing type.
    pub fn push_member(&mut self, kind: MemberKind) -> Result<()> {
        let enclosing = self.enclosing_type_index()?;
        self.push(Scope::Member(MemberScope { kind, enclosing }));
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Scope> {
        let scope = self.entries.pop().ok_or(WriteError::EmptyScope)?;
        tracing::trace!(depth = self.entries.len(), ?scope, "pop scope");
        Ok(scope)
    }

    pub fn peek(&self) -> Result<&Scope> {
        self.entries.last().ok_or(WriteError::EmptyScope)
    }

    /// Simple name of the nearest open class or interface.
    pub fn current_enclosing_type_name(&self) -> Result<&str> {
        let index = self.enclosing_type_index()?;
        match &self.entries[index] {
            Scope::Type(ty) => Ok(&ty.simple_name),
            Scope::Member(_) => Err(WriteError::EmptyScope),
        }
    }

    fn enclosing_type_index(&self) -> Result<usize> {
        match self.entries.last() {
            None => Err(WriteError::EmptyScope),
            Some(Scope::Member(member)) => Ok(member.enclosing),
            Some(Scope::Type(_)) => Ok(self.entries.len() - 1),
        }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/scope.rs"]
mod tests;
