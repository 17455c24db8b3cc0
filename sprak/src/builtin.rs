// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::TypeDeclaration;

/// The functions every program gets for free. A user function with the same
/// name takes precedence.
pub struct Builtin;

impl Builtin {
    pub const FUNCTIONS: &'static [BuiltinFunction] = &[BuiltinFunction {
        kind: BuiltinKind::Print,
        name: "print",
        parameters: &[TypeDeclaration::String],
        return_type: None,
    }];

    #[must_use]
    pub fn function(name: &str) -> Option<&'static BuiltinFunction> {
        Self::FUNCTIONS.iter().find(|function| function.name == name)
    }
}

#[derive(Debug)]
pub struct BuiltinFunction {
    pub kind: BuiltinKind,
    pub name: &'static str,
    pub parameters: &'static [TypeDeclaration],
    pub return_type: Option<TypeDeclaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    /// Writes its string argument and a newline to the interpreter's output.
    Print,
}
