// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod builtin;
mod expression;
mod lexer;
mod location;
mod parser;
mod returns;
mod statement;
mod type_;

pub use self::{
    builtin::{Builtin, BuiltinFunction, BuiltinKind},
    expression::{ArithmeticOperator, ComparisonOperator, Expression, ExpressionKind, LogicalOperator},
    lexer::{
        Keyword, Lexer, LexerError, LexerErrorKind, Punctuator, Token, TokenKind, MAX_FRACTIONAL_DIGITS,
        MAX_IDENTIFIER_LENGTH,
    },
    location::SourceLocation,
    parser::{ParseDiagnostic, ParseError, ParseResult, Parser},
    returns::{ReturnCheckError, ReturnCheckResult, ReturnTypeChecker, MAIN_FUNCTION_NAME, MAX_CALL_DEPTH},
    statement::{
        AssignmentStatement, BlockStatement, DeclarationStatement, FunctionDefinition, IfStatement, MatchArm,
        MatchStatement, MemberAssignmentStatement, Program, ReturnStatement, Statement, StatementKind,
        StructDefinition, TypeDefinition, VariantDefinition, WhileStatement,
    },
    type_::{Parameter, TypeDeclaration},
};
