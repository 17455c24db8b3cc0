// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{self, Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "at sign")]
    AtSign,
    #[strum(serialize = "colon")]
    Colon,
    #[strum(serialize = "double colon")]
    DoubleColon,
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "left parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "right parenthesis")]
    RightParenthesis,
    #[strum(serialize = "left curly bracket")]
    LeftCurlyBracket,
    #[strum(serialize = "right curly bracket")]
    RightCurlyBracket,
    #[strum(serialize = "semicolon")]
    Semicolon,
    #[strum(serialize = "plus sign")]
    PlusSign,
    #[strum(serialize = "hyphen-minus")]
    HyphenMinus,
    #[strum(serialize = "asterisk")]
    Asterisk,
    #[strum(serialize = "solidus")]
    Solidus,
    #[strum(serialize = "percent sign")]
    PercentSign,
    #[strum(serialize = "period")]
    Period,
    #[strum(serialize = "assignment")]
    Assignment,
    #[strum(serialize = "equals")]
    Equals,
    #[strum(serialize = "not equals")]
    NotEquals,
    #[strum(serialize = "less than")]
    LessThan,
    #[strum(serialize = "less than or equal")]
    LessThanOrEqual,
    #[strum(serialize = "greater than")]
    GreaterThan,
    #[strum(serialize = "greater than or equal")]
    GreaterThanOrEqual,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AtSign => "@",
            Self::Colon => ":",
            Self::DoubleColon => "::",
            Self::Comma => ",",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::Semicolon => ";",
            Self::PlusSign => "+",
            Self::HyphenMinus => "-",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::PercentSign => "%",
            Self::Period => ".",
            Self::Assignment => "=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
