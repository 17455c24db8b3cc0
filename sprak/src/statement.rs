// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use crate::{Expression, Parameter, SourceLocation, TypeDeclaration};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub position: SourceLocation,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Declaration(DeclarationStatement),
    ConstDeclaration(DeclarationStatement),
    Assignment(AssignmentStatement),
    MemberAssignment(MemberAssignmentStatement),

    /// A function call in statement position.
    Expression(Expression),

    If(IfStatement),
    While(WhileStatement),
    Match(MatchStatement),
    Return(ReturnStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationStatement {
    pub parameter: Parameter,
    pub initializer: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub name: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberAssignmentStatement {
    pub subject: String,
    pub member: String,
    pub value: Expression,
}

/// The conditions and blocks of an `if`/`elif` chain line up by index.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub conditions: Vec<Expression>,
    pub blocks: Vec<BlockStatement>,
    pub else_block: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub block: BlockStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchStatement {
    pub subject: Expression,
    pub arms: Vec<MatchArm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub position: SourceLocation,
    pub type_name: String,
    pub member: String,
    pub binding: String,
    pub block: BlockStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub position: SourceLocation,
    pub statements: Vec<Statement>,
}

/// A function definition. `return_type` of `None` means the function does
/// not produce a value.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub position: SourceLocation,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeDeclaration>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDefinition {
    pub position: SourceLocation,
    pub name: String,
    pub members: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantDefinition {
    pub position: SourceLocation,
    pub name: String,
    pub members: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    Struct(StructDefinition),
    Variant(VariantDefinition),
}

impl TypeDefinition {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(definition) => &definition.name,
            Self::Variant(definition) => &definition.name,
        }
    }

    #[must_use]
    pub fn members(&self) -> &[Parameter] {
        match self {
            Self::Struct(definition) => &definition.members,
            Self::Variant(definition) => &definition.members,
        }
    }

    #[must_use]
    pub const fn position(&self) -> SourceLocation {
        match self {
            Self::Struct(definition) => definition.position,
            Self::Variant(definition) => definition.position,
        }
    }
}

/// Everything a source file defines. Global declarations hold `Declaration`
/// or `ConstDeclaration` statements and keep their source order, since later
/// initializers may read earlier globals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub functions: HashMap<String, FunctionDefinition>,
    pub declarations: Vec<Statement>,
    pub type_definitions: HashMap<String, TypeDefinition>,
}

impl Program {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The name a global declaration statement binds.
    #[must_use]
    pub fn declared_name(statement: &Statement) -> Option<&str> {
        match &statement.kind {
            StatementKind::Declaration(declaration) | StatementKind::ConstDeclaration(declaration) => {
                Some(&declaration.parameter.name)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn declares_global(&self, name: &str) -> bool {
        self.declarations
            .iter()
            .any(|statement| Self::declared_name(statement) == Some(name))
    }
}
