// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::CharIndices;

use crate::SourceLocation;

use super::{Keyword, Punctuator, Token, TokenKind};

pub const MAX_IDENTIFIER_LENGTH: usize = 100;
pub const MAX_FRACTIONAL_DIGITS: u32 = 10;

/// Turns source text into [`Token`]s.
///
/// Comments never become tokens and lexing always continues to the end of the
/// input; anything suspicious is recorded as a recoverable [`LexerError`].
pub struct Lexer<'source> {
    chars: CharIndices<'source>,
    current: Option<(SourceLocation, char)>,
    line: usize,
    column: usize,
    errors: Vec<LexerError>,
}

impl<'source> Lexer<'source> {
    #[must_use]
    pub fn new(input: &'source str) -> Self {
        Self {
            chars: input.char_indices(),
            current: None,
            line: 1,
            column: 1,
            errors: Vec::new(),
        }
    }

    /// Lexes the whole input, returning the tokens and the errors that were
    /// encountered along the way.
    #[must_use]
    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let mut tokens = Vec::new();
        while let Some(token) = self.next() {
            tokens.push(token);
        }

        (tokens, self.errors)
    }

    pub fn next(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let (position, ch) = self.peek_char()?;
        match ch {
            '"' => Some(self.consume_string(position)),
            '#' => {
                self.consume_until_end_of_line();
                self.next()
            }
            '/' => self.handle_solidus(position),
            _ if ch.is_ascii_digit() => Some(self.consume_number(position)),
            _ if ch.is_ascii_alphabetic() => Some(self.consume_identifier_or_keyword(position)),
            _ => Some(self.consume_punctuator(position, ch)),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, ch)) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }

            self.consume_char();
        }
    }

    fn consume_string(&mut self, position: SourceLocation) -> Token {
        self.consume_char();

        let mut value = String::new();
        loop {
            let Some((location, ch)) = self.next_char() else {
                self.report(position, LexerErrorKind::UnterminatedString);
                break;
            };

            match ch {
                '"' => break,
                '\\' => match self.next_char() {
                    Some((_, '"')) => value.push('"'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, invalid)) => {
                        value.push('\\');
                        value.push(invalid);
                        self.report(location, LexerErrorKind::InvalidEscape { invalid });
                    }
                    None => {
                        self.report(position, LexerErrorKind::UnterminatedString);
                        break;
                    }
                },
                _ => value.push(ch),
            }
        }

        Token {
            kind: TokenKind::StringLiteral(value),
            position,
        }
    }

    fn consume_identifier_or_keyword(&mut self, position: SourceLocation) -> Token {
        let mut name = String::new();
        while let Some((_, ch)) = self.peek_char() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }

            self.consume_char();
            name.push(ch);
        }

        if name.len() > MAX_IDENTIFIER_LENGTH {
            self.report(position, LexerErrorKind::IdentifierTooLong);
            name.truncate(MAX_IDENTIFIER_LENGTH);
        }

        let kind = match Keyword::parse(&name) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(name),
        };

        Token { kind, position }
    }

    fn consume_number(&mut self, position: SourceLocation) -> Token {
        let mut value: i32 = 0;
        let mut overflowed = false;
        while let Some((_, ch)) = self.peek_char() {
            let Some(digit) = ch.to_digit(10) else { break };
            self.consume_char();

            if overflowed {
                continue;
            }

            match value.checked_mul(10).and_then(|v| v.checked_add(digit as i32)) {
                Some(next) => value = next,
                None => {
                    overflowed = true;
                    self.report(position, LexerErrorKind::IntegerLiteralTooLarge);
                }
            }
        }

        if let Some((_, '.')) = self.peek_char() {
            self.consume_char();
            return Token {
                kind: TokenKind::Float(self.consume_fraction(position, value)),
                position,
            };
        }

        Token {
            kind: TokenKind::Integer(value),
            position,
        }
    }

    fn consume_fraction(&mut self, position: SourceLocation, integer_part: i32) -> f32 {
        let mut fraction: i64 = 0;
        let mut digits: u32 = 0;
        let mut truncated = false;
        while let Some((_, ch)) = self.peek_char() {
            let Some(digit) = ch.to_digit(10) else { break };
            self.consume_char();

            if digits == MAX_FRACTIONAL_DIGITS {
                if !truncated {
                    truncated = true;
                    self.report(position, LexerErrorKind::TooManyFractionalDigits);
                }
                continue;
            }

            fraction = fraction * 10 + i64::from(digit);
            digits += 1;
        }

        (f64::from(integer_part) + fraction as f64 / 10f64.powi(digits as i32)) as f32
    }

    fn handle_solidus(&mut self, position: SourceLocation) -> Option<Token> {
        self.consume_char();

        if let Some((_, '*')) = self.peek_char() {
            self.consume_char();
            self.consume_until_end_of_comment(position);
            return self.next();
        }

        Some(Token {
            kind: TokenKind::Punctuator(Punctuator::Solidus),
            position,
        })
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some((_, ch)) = self.next_char() {
            if ch == '\n' {
                break;
            }
        }
    }

    fn consume_until_end_of_comment(&mut self, start: SourceLocation) {
        let mut previous = '\0';
        while let Some((_, ch)) = self.next_char() {
            if previous == '*' && ch == '/' {
                return;
            }

            previous = ch;
        }

        self.report(start, LexerErrorKind::UnterminatedComment);
    }

    fn consume_punctuator(&mut self, position: SourceLocation, ch: char) -> Token {
        self.consume_char();

        let punctuator = match ch {
            '(' => Punctuator::LeftParenthesis,
            ')' => Punctuator::RightParenthesis,
            '{' => Punctuator::LeftCurlyBracket,
            '}' => Punctuator::RightCurlyBracket,
            ';' => Punctuator::Semicolon,
            ',' => Punctuator::Comma,
            '.' => Punctuator::Period,
            '@' => Punctuator::AtSign,
            '+' => Punctuator::PlusSign,
            '-' => Punctuator::HyphenMinus,
            '*' => Punctuator::Asterisk,
            '%' => Punctuator::PercentSign,
            ':' => self.continue_with(':', Punctuator::DoubleColon, Punctuator::Colon),
            '=' => self.continue_with('=', Punctuator::Equals, Punctuator::Assignment),
            '<' => self.continue_with('=', Punctuator::LessThanOrEqual, Punctuator::LessThan),
            '>' => self.continue_with('=', Punctuator::GreaterThanOrEqual, Punctuator::GreaterThan),
            '!' => {
                if let Some((_, '=')) = self.peek_char() {
                    self.consume_char();
                    Punctuator::NotEquals
                } else {
                    return Token {
                        kind: TokenKind::IllegalCharacter('!'),
                        position,
                    };
                }
            }
            _ => {
                return Token {
                    kind: TokenKind::IllegalCharacter(ch),
                    position,
                }
            }
        };

        Token {
            kind: TokenKind::Punctuator(punctuator),
            position,
        }
    }

    fn continue_with(&mut self, expected: char, doubled: Punctuator, single: Punctuator) -> Punctuator {
        if let Some((_, ch)) = self.peek_char() {
            if ch == expected {
                self.consume_char();
                return doubled;
            }
        }

        single
    }

    fn next_char(&mut self) -> Option<(SourceLocation, char)> {
        if let Some(current) = self.current.take() {
            return Some(current);
        }

        let (_, ch) = self.chars.next()?;
        let location = SourceLocation::new(self.line, self.column);

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some((location, ch))
    }

    fn peek_char(&mut self) -> Option<(SourceLocation, char)> {
        if self.current.is_none() {
            self.current = self.next_char();
        }

        self.current
    }

    fn consume_char(&mut self) {
        _ = self.next_char();
    }

    fn report(&mut self, location: SourceLocation, kind: LexerErrorKind) {
        log::debug!("lexer error at {location}: {kind}");
        self.errors.push(LexerError { location, kind });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexerError {
    pub location: SourceLocation,
    pub kind: LexerErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, strum::AsRefStr)]
pub enum LexerErrorKind {
    #[error("identifier is longer than 100 characters")]
    IdentifierTooLong,

    #[error("integer literal does not fit in a 32-bit integer")]
    IntegerLiteralTooLarge,

    #[error("float literal has more than 10 fractional digits")]
    TooManyFractionalDigits,

    #[error("invalid escape sequence `\\{invalid}`")]
    InvalidEscape { invalid: char },

    #[error("string literal is not terminated")]
    UnterminatedString,

    #[error("block comment is not terminated")]
    UnterminatedComment,
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
