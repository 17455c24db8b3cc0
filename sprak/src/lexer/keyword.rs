// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    And,
    Bool,
    Const,
    Elif,
    Else,
    False,
    Float,
    Fn,
    If,
    Int,
    Match,
    Not,
    Or,
    Return,
    String,
    Struct,
    True,
    Variant,
    While,
}

impl Keyword {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|keyword| keyword.as_ref() == input)
    }
}
