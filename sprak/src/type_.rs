// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{self, Display};

use crate::Keyword;

/// A type as written in the source. Builtin types never carry a name, a
/// custom type always does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDeclaration {
    Int,
    Float,
    Bool,
    String,
    Custom(std::string::String),
}

impl TypeDeclaration {
    /// Maps a builtin type keyword to its type. Returns `None` for every
    /// other keyword, so custom types never come through here.
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Int => Some(Self::Int),
            Keyword::Float => Some(Self::Float),
            Keyword::Bool => Some(Self::Bool),
            Keyword::String => Some(Self::String),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Custom(name) => name,
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(..))
    }
}

impl Display for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub type_declaration: TypeDeclaration,
    pub name: String,
}
