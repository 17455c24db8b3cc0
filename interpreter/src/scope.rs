// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use sprak::{SourceLocation, TypeDeclaration};

use crate::{RuntimeError, RuntimeResult, Value};

/// A declared variable with its static type and const flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub type_declaration: TypeDeclaration,
    pub value: Value,
    pub constant: bool,
}

#[derive(Debug, Default)]
pub struct Scope {
    parent: Option<Box<Scope>>,
    variables: HashMap<String, Variable>,
}

impl Scope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push(self) -> Self {
        Self {
            parent: Some(Box::new(self)),
            variables: HashMap::new(),
        }
    }

    #[must_use]
    pub fn pop(self) -> Self {
        *self.parent.expect("Top-level scope popped!")
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Variable> {
        if let Some(variable) = self.variables.get(name) {
            return Some(variable);
        }

        if let Some(parent) = self.parent.as_ref() {
            return parent.find(name);
        }

        None
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Variable> {
        if let Some(variable) = self.variables.get_mut(name) {
            return Some(variable);
        }

        if let Some(parent) = self.parent.as_mut() {
            return parent.find_mut(name);
        }

        None
    }

    /// Binds a name in this scope. Shadowing an outer scope is allowed,
    /// rebinding within the same scope is not.
    pub fn declare(&mut self, name: String, variable: Variable) -> RuntimeResult<()> {
        if self.variables.contains_key(&name) {
            return Err(RuntimeError::DuplicatedVariable { name });
        }

        self.variables.insert(name, variable);
        Ok(())
    }
}

/// One call frame: which function runs, where it was called from, and its
/// scope chain.
#[derive(Debug)]
pub struct Context {
    function_name: String,
    position: SourceLocation,
    scope: Scope,
}

impl Context {
    #[must_use]
    pub fn new(function_name: String, position: SourceLocation) -> Self {
        Self {
            function_name,
            position,
            scope: Scope::new(),
        }
    }

    #[must_use]
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    #[must_use]
    pub const fn position(&self) -> SourceLocation {
        self.position
    }

    pub fn push_scope(&mut self) {
        self.scope = std::mem::take(&mut self.scope).push();
    }

    pub fn pop_scope(&mut self) {
        self.scope = std::mem::take(&mut self.scope).pop();
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Variable> {
        self.scope.find(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.scope.find_mut(name)
    }

    pub fn declare(&mut self, name: String, variable: Variable) -> RuntimeResult<()> {
        self.scope.declare(name, variable)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn variable(value: i32) -> Variable {
        Variable {
            type_declaration: TypeDeclaration::Int,
            value: Value::Integer(value),
            constant: false,
        }
    }

    #[test]
    fn shadowing_is_per_scope() {
        let mut context = Context::new(String::from("test"), SourceLocation::START);
        context.declare(String::from("x"), variable(2)).unwrap();

        context.push_scope();
        context.declare(String::from("x"), variable(5)).unwrap();
        assert_eq!(context.find("x").unwrap().value, Value::Integer(5));

        context.pop_scope();
        assert_eq!(context.find("x").unwrap().value, Value::Integer(2));
    }

    #[test]
    fn redeclaring_in_the_same_scope_fails() {
        let mut context = Context::new(String::from("test"), SourceLocation::START);
        context.declare(String::from("x"), variable(1)).unwrap();

        let error = context.declare(String::from("x"), variable(2)).unwrap_err();
        assert!(matches!(error, RuntimeError::DuplicatedVariable { name } if name == "x"));
    }

    #[test]
    fn writes_reach_the_defining_scope() {
        let mut context = Context::new(String::from("test"), SourceLocation::START);
        context.declare(String::from("x"), variable(1)).unwrap();

        context.push_scope();
        context.find_mut("x").unwrap().value = Value::Integer(7);
        context.pop_scope();

        assert_eq!(context.find("x").unwrap().value, Value::Integer(7));
    }
}
