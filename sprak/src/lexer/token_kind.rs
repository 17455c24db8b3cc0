// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{self, Display};

use super::{Keyword, Punctuator};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier(String),
    StringLiteral(String),
    Integer(i32),
    Float(f32),
    Punctuator(Punctuator),
    IllegalCharacter(char),
}

impl TokenKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Keyword(..) => "Keyword",
            Self::Identifier(..) => "Identifier",
            Self::StringLiteral(..) => "StringLiteral",
            Self::Integer(..) => "Integer",
            Self::Float(..) => "Float",
            Self::Punctuator(..) => "Punctuator",
            Self::IllegalCharacter(..) => "IllegalCharacter",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Identifier(name) => f.write_str(name),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::Integer(value) => value.fmt(f),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::IllegalCharacter(ch) => write!(f, "{ch}"),
        }
    }
}
