// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use sprak::{SourceLocation, TypeDeclaration};

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// A failure during execution. Evaluation stops at the first one.
#[derive(Debug, Clone, PartialEq, thiserror::Error, strum::AsRefStr)]
pub enum RuntimeError {
    #[error("`{operator}` is not supported for this operand, at {position}")]
    ArithmeticNotSupported {
        operator: &'static str,
        position: SourceLocation,
    },

    #[error("these values cannot be compared")]
    CompareNotSupported,

    #[error("variable `{name}` is already declared in this scope")]
    DuplicatedVariable { name: String },

    #[error("the call at {position} does not produce a value")]
    ExpressionDidNotEvaluate { position: SourceLocation },

    #[error("function `{function}` finished without a return statement")]
    FunctionDidNotReturn { function: String },

    #[error("the return statement must carry a value in this function")]
    FunctionDidNotReturnValue,

    #[error("function `{name}` is not defined, called at {position}")]
    FunctionNotDefined { name: String, position: SourceLocation },

    #[error("`{operator}` overflowed the integer range, at {position}")]
    IntegerOverflow {
        operator: &'static str,
        position: SourceLocation,
    },

    #[error("`{name}` takes {expected} arguments but {found} were provided, at {position}")]
    InvalidNumberOfArguments {
        name: String,
        expected: usize,
        found: usize,
        position: SourceLocation,
    },

    #[error("only variant values can be matched, at {position}")]
    InvalidTypeForMatch { position: SourceLocation },

    #[error("variant `{type_name}` has no member `{member}`")]
    InvalidVariantMember { type_name: String, member: String },

    #[error("the member has not been given a value")]
    MemberNotInitialized,

    #[error("no arm matches `{type_name}::{member}`, at {position}")]
    NoMatchingArm {
        type_name: String,
        member: String,
        position: SourceLocation,
    },

    #[error("the struct has no such member")]
    NoStructMember,

    #[error("`{name}` is not a variant type, at {position}")]
    NotAVariantType { name: String, position: SourceLocation },

    #[error("variable `{name}` is not declared")]
    NoVariable { name: String },

    #[error("`{operator}` is not supported for `{type_declaration}` values, at {position}")]
    OperationNotSupported {
        operator: &'static str,
        type_declaration: TypeDeclaration,
        position: SourceLocation,
    },

    #[error("`{name}` is a constant and cannot be reassigned, at {position}")]
    ReassignConstVariable { name: String, position: SourceLocation },

    #[error("function calls nest too deeply")]
    StackLimitReached,

    #[error("type `{name}` is not defined")]
    TypeNotDefined { name: String },

    #[error("a value of type `{provided}` was provided where `{expected}` was expected")]
    TypesDoNotMatch {
        provided: TypeDeclaration,
        expected: TypeDeclaration,
    },

    #[error("the value has an unexpected type, at {position}")]
    UnexpectedType { position: SourceLocation },

    #[error("this cast is not supported, at {position}")]
    UnsupportedCast { position: SourceLocation },

    #[error("division by zero at {position}")]
    ZeroDivision { position: SourceLocation },
}

impl RuntimeError {
    /// The bare variant name, handy for asserting on the error class
    /// without repeating whole messages.
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
