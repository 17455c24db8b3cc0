// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{self, Display};

use crate::{SourceLocation, TypeDeclaration};

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub position: SourceLocation,
    pub kind: ExpressionKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    IntegerLiteral(i32),
    FloatLiteral(f32),
    BooleanLiteral(bool),
    StringLiteral(String),
    Identifier(String),

    /// Arithmetic negation, `-x`.
    Negate(Box<Expression>),

    /// Boolean negation, `not x`.
    LogicalNot(Box<Expression>),

    Arithmetic {
        operator: ArithmeticOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    Comparison {
        operator: ComparisonOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    Logical {
        operator: LogicalOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    FunctionCall {
        name: String,
        arguments: Vec<Expression>,
    },

    /// `(int) x` and friends. The target is always a builtin type; the
    /// parser never produces a custom type here.
    Cast {
        target: TypeDeclaration,
        operand: Box<Expression>,
    },

    /// `@x`, a structural deep copy of the operand.
    Copied(Box<Expression>),

    /// `Point { 4, 3 }`, or `{ 4, 3 }` when the type comes from the
    /// enclosing declaration.
    StructLiteral {
        type_name: Option<String>,
        values: Vec<Expression>,
    },

    /// `subject.member`.
    Member {
        subject: String,
        member: String,
    },

    /// `Type::member(value)`.
    VariantLiteral {
        type_name: String,
        member: String,
        value: Box<Expression>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl ArithmeticOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }
}

impl Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equals,
    NotEquals,
}

impl ComparisonOperator {
    /// Equality comparisons also apply to strings, ordering comparisons to
    /// numbers only.
    #[must_use]
    pub const fn is_equality(&self) -> bool {
        matches!(self, Self::Equals | Self::NotEquals)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
