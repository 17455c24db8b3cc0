// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{
    ArithmeticOperator, AssignmentStatement, BlockStatement, ComparisonOperator, DeclarationStatement, Expression,
    ExpressionKind, FunctionDefinition, IfStatement, Keyword, LogicalOperator, MatchArm, MatchStatement,
    MemberAssignmentStatement, Parameter, Program, Punctuator, ReturnStatement, SourceLocation, Statement,
    StatementKind, StructDefinition, Token, TokenKind, TypeDeclaration, TypeDefinition, VariantDefinition,
    WhileStatement,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over the token stream.
///
/// Redefinitions are recoverable: the first definition wins, a diagnostic is
/// recorded and parsing continues. Every other failure aborts the parse with
/// a [`ParseError`].
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
    diagnostics: Vec<ParseDiagnostic>,
}

impl<'tokens> Parser<'tokens> {
    #[must_use]
    pub fn new(tokens: &'tokens [Token]) -> Self {
        Self {
            tokens,
            cursor: 0,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut program = Program::new();

        while !self.is_at_end() {
            self.parse_top_level(&mut program)?;
        }

        Ok(program)
    }

    fn parse_top_level(&mut self, program: &mut Program) -> ParseResult<()> {
        let token = self.peek_token()?;
        match &token.kind {
            TokenKind::Keyword(Keyword::Fn) => self.parse_function_definition(program),

            TokenKind::Keyword(Keyword::Struct | Keyword::Variant) => self.parse_type_definition(program),

            TokenKind::Keyword(Keyword::Const) => self.parse_global_declaration(program),

            TokenKind::Keyword(keyword) if TypeDeclaration::from_keyword(*keyword).is_some() => {
                self.parse_global_declaration(program)
            }

            TokenKind::Identifier(..) if self.next_token_is_identifier() => self.parse_global_declaration(program),

            _ => Err(ParseError::UnexpectedToken {
                token: token.clone(),
                expected: "a function, a type definition or a declaration",
            }),
        }
    }

    fn parse_function_definition(&mut self, program: &mut Program) -> ParseResult<()> {
        let position = self.consume_token()?.position;
        let (name, name_position) = self.expect_identifier("a function name after `fn`")?;
        self.expect_punctuator(Punctuator::LeftParenthesis, "`(` after the function name")?;

        let mut parameters = Vec::new();
        if !self.consume_punctuator_if(Punctuator::RightParenthesis) {
            loop {
                let type_declaration = self.parse_type()?;
                let (parameter_name, _) = self.expect_identifier("a parameter name")?;
                parameters.push(Parameter {
                    type_declaration,
                    name: parameter_name,
                });

                if self.consume_punctuator_if(Punctuator::Comma) {
                    continue;
                }

                self.expect_punctuator(Punctuator::RightParenthesis, "`,` or `)` in the parameter list")?;
                break;
            }
        }

        let return_type = if self.consume_punctuator_if(Punctuator::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let body = self.parse_block()?;

        if program.functions.contains_key(&name) {
            self.emit_diagnostic(ParseDiagnostic::FunctionAlreadyDefined {
                name,
                position: name_position,
            });
            return Ok(());
        }

        program.functions.insert(
            name.clone(),
            FunctionDefinition {
                position,
                name,
                parameters,
                return_type,
                body,
            },
        );
        Ok(())
    }

    fn parse_type_definition(&mut self, program: &mut Program) -> ParseResult<()> {
        let keyword_token = self.consume_token()?;
        let is_variant = keyword_token.kind == TokenKind::Keyword(Keyword::Variant);
        let position = keyword_token.position;
        let kind = if is_variant { "variant" } else { "struct" };

        let (name, name_position) = self.expect_identifier("a type name")?;
        let brace_position = self
            .expect_punctuator(Punctuator::LeftCurlyBracket, "`{` after the type name")?
            .position;

        let mut members = Vec::new();
        while !self.consume_punctuator_if(Punctuator::RightCurlyBracket) {
            let type_declaration = self.parse_type()?;
            let (member_name, _) = self.expect_identifier("a member name")?;
            self.expect_punctuator(Punctuator::Semicolon, "`;` after the member")?;
            members.push(Parameter {
                type_declaration,
                name: member_name,
            });
        }

        if members.is_empty() {
            return Err(ParseError::EmptyTypeDefinition {
                kind,
                name,
                position: brace_position,
            });
        }

        self.expect_punctuator(Punctuator::Semicolon, "`;` after the type definition")?;

        if program.type_definitions.contains_key(&name) {
            self.emit_diagnostic(ParseDiagnostic::TypeAlreadyDefined {
                name,
                position: name_position,
            });
            return Ok(());
        }

        let definition = if is_variant {
            TypeDefinition::Variant(VariantDefinition { position, name: name.clone(), members })
        } else {
            TypeDefinition::Struct(StructDefinition { position, name: name.clone(), members })
        };
        program.type_definitions.insert(name, definition);
        Ok(())
    }

    fn parse_global_declaration(&mut self, program: &mut Program) -> ParseResult<()> {
        let (statement, name) = self.parse_declaration()?;

        if program.declares_global(&name) {
            self.emit_diagnostic(ParseDiagnostic::GlobalAlreadyDefined {
                name,
                position: statement.position,
            });
            return Ok(());
        }

        program.declarations.push(statement);
        Ok(())
    }

    /// Parses `[const] type name = expression ;` and also returns the
    /// declared name for the caller's bookkeeping.
    fn parse_declaration(&mut self) -> ParseResult<(Statement, String)> {
        let position = self.peek_token()?.position;
        let constant = self.consume_keyword_if(Keyword::Const);

        let type_declaration = self.parse_type()?;
        let (name, _) = self.expect_identifier("a variable name in the declaration")?;
        self.expect_punctuator(Punctuator::Assignment, "`=` after the variable name")?;
        let initializer = self.parse_expression()?;
        self.expect_semicolon_after_statement()?;

        let declaration = DeclarationStatement {
            parameter: Parameter {
                type_declaration,
                name: name.clone(),
            },
            initializer,
        };
        let kind = if constant {
            StatementKind::ConstDeclaration(declaration)
        } else {
            StatementKind::Declaration(declaration)
        };

        Ok((Statement { position, kind }, name))
    }

    fn parse_block(&mut self) -> ParseResult<BlockStatement> {
        let position = self
            .expect_punctuator(Punctuator::LeftCurlyBracket, "`{` to open a block")?
            .position;

        let mut statements = Vec::new();
        while !self.consume_punctuator_if(Punctuator::RightCurlyBracket) {
            statements.push(self.parse_statement()?);
        }

        Ok(BlockStatement { position, statements })
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        let token = self.peek_token()?;
        match &token.kind {
            TokenKind::Keyword(Keyword::If) => self.parse_if_statement(),
            TokenKind::Keyword(Keyword::While) => self.parse_while_statement(),
            TokenKind::Keyword(Keyword::Match) => self.parse_match_statement(),
            TokenKind::Keyword(Keyword::Return) => self.parse_return_statement(),
            TokenKind::Keyword(Keyword::Const) => Ok(self.parse_declaration()?.0),

            TokenKind::Keyword(keyword) if TypeDeclaration::from_keyword(*keyword).is_some() => {
                Ok(self.parse_declaration()?.0)
            }

            TokenKind::Identifier(..) => self.parse_identifier_statement(),

            _ => Err(ParseError::UnexpectedToken {
                token: token.clone(),
                expected: "a statement",
            }),
        }
    }

    /// A statement that starts with an identifier is disambiguated by the
    /// token after it.
    fn parse_identifier_statement(&mut self) -> ParseResult<Statement> {
        let next = self.peek_token_at(1)?;
        match &next.kind {
            TokenKind::Identifier(..) => Ok(self.parse_declaration()?.0),
            TokenKind::Punctuator(Punctuator::Assignment) => self.parse_assignment(),
            TokenKind::Punctuator(Punctuator::Period) => self.parse_member_assignment(),
            TokenKind::Punctuator(Punctuator::LeftParenthesis) => self.parse_call_statement(),
            _ => Err(ParseError::UnexpectedToken {
                token: next.clone(),
                expected: "`=`, `.`, `(` or a variable name after the identifier",
            }),
        }
    }

    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let (name, position) = self.expect_identifier("a variable name")?;
        self.consume_token()?;
        let value = self.parse_expression()?;
        self.expect_semicolon_after_statement()?;

        Ok(Statement {
            position,
            kind: StatementKind::Assignment(AssignmentStatement { name, value }),
        })
    }

    fn parse_member_assignment(&mut self) -> ParseResult<Statement> {
        let (subject, position) = self.expect_identifier("a variable name")?;
        self.consume_token()?;
        let (member, _) = self.expect_identifier("a member name after `.`")?;
        self.expect_punctuator(Punctuator::Assignment, "`=` after the member access")?;
        let value = self.parse_expression()?;
        self.expect_semicolon_after_statement()?;

        Ok(Statement {
            position,
            kind: StatementKind::MemberAssignment(MemberAssignmentStatement { subject, member, value }),
        })
    }

    fn parse_call_statement(&mut self) -> ParseResult<Statement> {
        let (name, position) = self.expect_identifier("a function name")?;
        let arguments = self.parse_call_arguments()?;
        self.expect_semicolon_after_statement()?;

        Ok(Statement {
            position,
            kind: StatementKind::Expression(Expression {
                position,
                kind: ExpressionKind::FunctionCall { name, arguments },
            }),
        })
    }

    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        let position = self.consume_token()?.position;

        let mut conditions = Vec::new();
        let mut blocks = Vec::new();

        self.expect_punctuator(Punctuator::LeftParenthesis, "`(` after `if`")?;
        conditions.push(self.parse_expression()?);
        self.expect_punctuator(Punctuator::RightParenthesis, "`)` after the condition")?;
        blocks.push(self.parse_block()?);

        while self.consume_keyword_if(Keyword::Elif) {
            self.expect_punctuator(Punctuator::LeftParenthesis, "`(` after `elif`")?;
            conditions.push(self.parse_expression()?);
            self.expect_punctuator(Punctuator::RightParenthesis, "`)` after the condition")?;
            blocks.push(self.parse_block()?);
        }

        let else_block = if self.consume_keyword_if(Keyword::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement {
            position,
            kind: StatementKind::If(IfStatement {
                conditions,
                blocks,
                else_block,
            }),
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        let position = self.consume_token()?.position;

        self.expect_punctuator(Punctuator::LeftParenthesis, "`(` after `while`")?;
        let condition = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RightParenthesis, "`)` after the condition")?;
        let block = self.parse_block()?;

        Ok(Statement {
            position,
            kind: StatementKind::While(WhileStatement { condition, block }),
        })
    }

    fn parse_match_statement(&mut self) -> ParseResult<Statement> {
        let position = self.consume_token()?.position;

        self.expect_punctuator(Punctuator::LeftParenthesis, "`(` after `match`")?;
        let (subject_name, subject_position) = self.expect_identifier("a variable name as the match subject")?;
        self.expect_punctuator(Punctuator::RightParenthesis, "`)` after the match subject")?;
        self.expect_punctuator(Punctuator::LeftCurlyBracket, "`{` to open the match arms")?;

        let mut arms = Vec::new();
        while !self.consume_punctuator_if(Punctuator::RightCurlyBracket) {
            arms.push(self.parse_match_arm()?);
        }

        Ok(Statement {
            position,
            kind: StatementKind::Match(MatchStatement {
                subject: Expression {
                    position: subject_position,
                    kind: ExpressionKind::Identifier(subject_name),
                },
                arms,
            }),
        })
    }

    fn parse_match_arm(&mut self) -> ParseResult<MatchArm> {
        let (type_name, position) = self.expect_identifier("a variant type name in the match arm")?;
        self.expect_punctuator(Punctuator::DoubleColon, "`::` after the variant type")?;
        let (member, _) = self.expect_identifier("a member name after `::`")?;
        self.expect_punctuator(Punctuator::LeftParenthesis, "`(` after the member name")?;
        let (binding, _) = self.expect_identifier("a binding name for the member value")?;
        self.expect_punctuator(Punctuator::RightParenthesis, "`)` after the binding name")?;
        let block = self.parse_block()?;

        Ok(MatchArm {
            position,
            type_name,
            member,
            binding,
            block,
        })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let position = self.consume_token()?.position;

        if self.consume_punctuator_if(Punctuator::Semicolon) {
            return Ok(Statement {
                position,
                kind: StatementKind::Return(ReturnStatement { value: None }),
            });
        }

        let value = self.parse_expression()?;
        self.expect_semicolon_after_statement()?;

        Ok(Statement {
            position,
            kind: StatementKind::Return(ReturnStatement { value: Some(value) }),
        })
    }

    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_or_expression()
    }

    fn parse_or_expression(&mut self) -> ParseResult<Expression> {
        let lhs = self.parse_and_expression()?;

        if self.consume_keyword_if(Keyword::Or) {
            let position = lhs.position;
            let rhs = self.parse_or_expression()?;
            return Ok(Expression {
                position,
                kind: ExpressionKind::Logical {
                    operator: LogicalOperator::Or,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
            });
        }

        Ok(lhs)
    }

    fn parse_and_expression(&mut self) -> ParseResult<Expression> {
        let lhs = self.parse_not_expression()?;

        if self.consume_keyword_if(Keyword::And) {
            let position = lhs.position;
            let rhs = self.parse_and_expression()?;
            return Ok(Expression {
                position,
                kind: ExpressionKind::Logical {
                    operator: LogicalOperator::And,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
            });
        }

        Ok(lhs)
    }

    fn parse_not_expression(&mut self) -> ParseResult<Expression> {
        let position = self.current_position();
        if self.consume_keyword_if(Keyword::Not) {
            let operand = self.parse_relational_expression()?;
            return Ok(Expression {
                position,
                kind: ExpressionKind::LogicalNot(Box::new(operand)),
            });
        }

        self.parse_relational_expression()
    }

    /// Comparisons do not chain: the tail of `5 < 6 < 8` is left for the
    /// caller, which then stumbles over the second `<`.
    fn parse_relational_expression(&mut self) -> ParseResult<Expression> {
        let lhs = self.parse_additive_expression()?;

        let operator = match self.peek_punctuator() {
            Some(Punctuator::LessThan) => ComparisonOperator::LessThan,
            Some(Punctuator::LessThanOrEqual) => ComparisonOperator::LessThanOrEqual,
            Some(Punctuator::GreaterThan) => ComparisonOperator::GreaterThan,
            Some(Punctuator::GreaterThanOrEqual) => ComparisonOperator::GreaterThanOrEqual,
            Some(Punctuator::Equals) => ComparisonOperator::Equals,
            Some(Punctuator::NotEquals) => ComparisonOperator::NotEquals,
            _ => return Ok(lhs),
        };
        self.consume_token()?;

        let position = lhs.position;
        let rhs = self.parse_additive_expression()?;
        Ok(Expression {
            position,
            kind: ExpressionKind::Comparison {
                operator,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
        })
    }

    fn parse_additive_expression(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.parse_multiplicative_expression()?;

        loop {
            let operator = match self.peek_punctuator() {
                Some(Punctuator::PlusSign) => ArithmeticOperator::Add,
                Some(Punctuator::HyphenMinus) => ArithmeticOperator::Subtract,
                _ => return Ok(lhs),
            };
            self.consume_token()?;

            let position = lhs.position;
            let rhs = self.parse_multiplicative_expression()?;
            lhs = Expression {
                position,
                kind: ExpressionKind::Arithmetic {
                    operator,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
            };
        }
    }

    fn parse_multiplicative_expression(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.parse_unary_expression()?;

        loop {
            let operator = match self.peek_punctuator() {
                Some(Punctuator::Asterisk) => ArithmeticOperator::Multiply,
                Some(Punctuator::Solidus) => ArithmeticOperator::Divide,
                Some(Punctuator::PercentSign) => ArithmeticOperator::Modulo,
                _ => return Ok(lhs),
            };
            self.consume_token()?;

            let position = lhs.position;
            let rhs = self.parse_unary_expression()?;
            lhs = Expression {
                position,
                kind: ExpressionKind::Arithmetic {
                    operator,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
            };
        }
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let position = self.current_position();
        if self.consume_punctuator_if(Punctuator::HyphenMinus) {
            let operand = self.parse_cast_expression()?;
            return Ok(Expression {
                position,
                kind: ExpressionKind::Negate(Box::new(operand)),
            });
        }

        self.parse_cast_expression()
    }

    /// `(` followed by a builtin type keyword is a cast; any other `(` is a
    /// parenthesized expression handled by the primary parser.
    fn parse_cast_expression(&mut self) -> ParseResult<Expression> {
        if let Some(target) = self.peek_cast_target() {
            let position = self.consume_token()?.position;
            self.consume_token()?;
            self.expect_punctuator(Punctuator::RightParenthesis, "`)` after the cast type")?;

            let operand = self.parse_unary_expression()?;
            return Ok(Expression {
                position,
                kind: ExpressionKind::Cast {
                    target,
                    operand: Box::new(operand),
                },
            });
        }

        self.parse_primary_expression()
    }

    fn peek_cast_target(&self) -> Option<TypeDeclaration> {
        if self.peek_punctuator() != Some(Punctuator::LeftParenthesis) {
            return None;
        }

        match self.peek_token_at(1).ok()?.kind {
            TokenKind::Keyword(keyword) => TypeDeclaration::from_keyword(keyword),
            _ => None,
        }
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let token = self.peek_token()?;
        let position = token.position;

        match &token.kind {
            TokenKind::Integer(value) => {
                let kind = ExpressionKind::IntegerLiteral(*value);
                self.consume_token()?;
                Ok(Expression { position, kind })
            }

            TokenKind::Float(value) => {
                let kind = ExpressionKind::FloatLiteral(*value);
                self.consume_token()?;
                Ok(Expression { position, kind })
            }

            TokenKind::StringLiteral(value) => {
                let kind = ExpressionKind::StringLiteral(value.clone());
                self.consume_token()?;
                Ok(Expression { position, kind })
            }

            TokenKind::Keyword(Keyword::True) => {
                self.consume_token()?;
                Ok(Expression {
                    position,
                    kind: ExpressionKind::BooleanLiteral(true),
                })
            }

            TokenKind::Keyword(Keyword::False) => {
                self.consume_token()?;
                Ok(Expression {
                    position,
                    kind: ExpressionKind::BooleanLiteral(false),
                })
            }

            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.consume_token()?;
                self.parse_identifier_expression(name, position)
            }

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                self.consume_token()?;
                let expression = self.parse_expression()?;
                self.expect_punctuator(Punctuator::RightParenthesis, "`)` to close the parenthesized expression")?;
                Ok(expression)
            }

            TokenKind::Punctuator(Punctuator::AtSign) => {
                self.consume_token()?;
                let operand = self.parse_primary_expression()?;
                Ok(Expression {
                    position,
                    kind: ExpressionKind::Copied(Box::new(operand)),
                })
            }

            TokenKind::Punctuator(Punctuator::LeftCurlyBracket) => {
                let values = self.parse_struct_values()?;
                Ok(Expression {
                    position,
                    kind: ExpressionKind::StructLiteral { type_name: None, values },
                })
            }

            _ => Err(ParseError::MissingExpression { position }),
        }
    }

    fn parse_identifier_expression(&mut self, name: String, position: SourceLocation) -> ParseResult<Expression> {
        let kind = match self.peek_punctuator() {
            Some(Punctuator::LeftParenthesis) => {
                let arguments = self.parse_call_arguments()?;
                ExpressionKind::FunctionCall { name, arguments }
            }

            Some(Punctuator::DoubleColon) => {
                self.consume_token()?;
                let (member, _) = self.expect_identifier("a member name after `::`")?;
                self.expect_punctuator(Punctuator::LeftParenthesis, "`(` after the variant member")?;
                let value = self.parse_expression()?;
                self.expect_punctuator(Punctuator::RightParenthesis, "`)` after the variant value")?;
                ExpressionKind::VariantLiteral {
                    type_name: name,
                    member,
                    value: Box::new(value),
                }
            }

            Some(Punctuator::Period) => {
                self.consume_token()?;
                let (member, _) = self.expect_identifier("a member name after `.`")?;
                ExpressionKind::Member { subject: name, member }
            }

            Some(Punctuator::LeftCurlyBracket) => {
                let values = self.parse_struct_values()?;
                ExpressionKind::StructLiteral {
                    type_name: Some(name),
                    values,
                }
            }

            _ => ExpressionKind::Identifier(name),
        };

        Ok(Expression { position, kind })
    }

    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.expect_punctuator(Punctuator::LeftParenthesis, "`(` to open the argument list")?;

        let mut arguments = Vec::new();
        if self.consume_punctuator_if(Punctuator::RightParenthesis) {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_expression()?);

            if self.consume_punctuator_if(Punctuator::Comma) {
                continue;
            }

            self.expect_punctuator(Punctuator::RightParenthesis, "`,` or `)` in the argument list")?;
            return Ok(arguments);
        }
    }

    fn parse_struct_values(&mut self) -> ParseResult<Vec<Expression>> {
        self.expect_punctuator(Punctuator::LeftCurlyBracket, "`{` to open the struct values")?;

        let mut values = Vec::new();
        if self.consume_punctuator_if(Punctuator::RightCurlyBracket) {
            return Ok(values);
        }

        loop {
            values.push(self.parse_expression()?);

            if self.consume_punctuator_if(Punctuator::Comma) {
                continue;
            }

            self.expect_punctuator(Punctuator::RightCurlyBracket, "`,` or `}` in the struct values")?;
            return Ok(values);
        }
    }

    fn parse_type(&mut self) -> ParseResult<TypeDeclaration> {
        let token = self.consume_token()?;
        match &token.kind {
            TokenKind::Keyword(keyword) => match TypeDeclaration::from_keyword(*keyword) {
                Some(type_declaration) => Ok(type_declaration),
                None => Err(ParseError::UnexpectedToken {
                    token: token.clone(),
                    expected: "a type name",
                }),
            },
            TokenKind::Identifier(name) => Ok(TypeDeclaration::Custom(name.clone())),
            _ => Err(ParseError::UnexpectedToken {
                token: token.clone(),
                expected: "a type name",
            }),
        }
    }

    fn emit_diagnostic(&mut self, diagnostic: ParseDiagnostic) {
        log::warn!("parse diagnostic: {diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek_token(&self) -> ParseResult<&'tokens Token> {
        match self.tokens.get(self.cursor) {
            Some(token) => Ok(token),
            None => Err(ParseError::EndOfFile),
        }
    }

    fn peek_token_at(&self, offset: usize) -> ParseResult<&'tokens Token> {
        match self.tokens.get(self.cursor + offset) {
            Some(token) => Ok(token),
            None => Err(ParseError::EndOfFile),
        }
    }

    fn peek_punctuator(&self) -> Option<Punctuator> {
        match self.tokens.get(self.cursor) {
            Some(Token {
                kind: TokenKind::Punctuator(punctuator),
                ..
            }) => Some(*punctuator),
            _ => None,
        }
    }

    fn next_token_is_identifier(&self) -> bool {
        matches!(
            self.tokens.get(self.cursor + 1),
            Some(Token {
                kind: TokenKind::Identifier(..),
                ..
            })
        )
    }

    /// The position of the current token, or of the end of the input.
    fn current_position(&self) -> SourceLocation {
        match self.tokens.get(self.cursor) {
            Some(token) => token.position,
            None => self
                .tokens
                .last()
                .map_or(SourceLocation::START, |token| token.position),
        }
    }

    fn consume_token(&mut self) -> ParseResult<&'tokens Token> {
        let token = self.peek_token()?;
        self.cursor += 1;
        Ok(token)
    }

    fn consume_punctuator_if(&mut self, punctuator: Punctuator) -> bool {
        if self.peek_punctuator() == Some(punctuator) {
            self.cursor += 1;
            return true;
        }

        false
    }

    fn consume_keyword_if(&mut self, keyword: Keyword) -> bool {
        match self.tokens.get(self.cursor) {
            Some(token) if token.kind == TokenKind::Keyword(keyword) => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    fn expect_punctuator(&mut self, punctuator: Punctuator, expected: &'static str) -> ParseResult<&'tokens Token> {
        let token = self.consume_token()?;
        if token.kind == TokenKind::Punctuator(punctuator) {
            return Ok(token);
        }

        Err(ParseError::UnexpectedToken {
            token: token.clone(),
            expected,
        })
    }

    fn expect_identifier(&mut self, expected: &'static str) -> ParseResult<(String, SourceLocation)> {
        let token = self.consume_token()?;
        match token.as_identifier() {
            Some(name) => Ok((name.to_string(), token.position)),
            None => Err(ParseError::UnexpectedToken {
                token: token.clone(),
                expected,
            }),
        }
    }

    fn expect_semicolon_after_statement(&mut self) -> ParseResult<()> {
        let token = self.peek_token()?;
        if token.kind == TokenKind::Punctuator(Punctuator::Semicolon) {
            self.cursor += 1;
            return Ok(());
        }

        Err(ParseError::MissingSemicolon { token: token.clone() })
    }
}

/// A failure the parser cannot recover from.
#[derive(Debug, Clone, PartialEq, thiserror::Error, strum::AsRefStr)]
pub enum ParseError {
    #[error("unexpected end of file")]
    EndOfFile,

    #[error("unexpected token `{token}` at {}, expected {expected}", token.position)]
    UnexpectedToken { token: Token, expected: &'static str },

    #[error("missing semicolon at the end of the statement, found `{token}` at {}", token.position)]
    MissingSemicolon { token: Token },

    #[error("missing expression at {position}")]
    MissingExpression { position: SourceLocation },

    #[error("{kind} `{name}` must have at least one member, at {position}")]
    EmptyTypeDefinition {
        kind: &'static str,
        name: String,
        position: SourceLocation,
    },
}

impl ParseError {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> Option<SourceLocation> {
        match self {
            Self::EndOfFile => None,
            Self::UnexpectedToken { token, .. } | Self::MissingSemicolon { token } => Some(token.position),
            Self::MissingExpression { position } | Self::EmptyTypeDefinition { position, .. } => Some(*position),
        }
    }
}

/// A recoverable problem: recorded, and parsing carries on.
#[derive(Debug, Clone, PartialEq, thiserror::Error, strum::AsRefStr)]
pub enum ParseDiagnostic {
    #[error("function `{name}` is already defined, second definition at {position}")]
    FunctionAlreadyDefined { name: String, position: SourceLocation },

    #[error("type `{name}` is already defined, second definition at {position}")]
    TypeAlreadyDefined { name: String, position: SourceLocation },

    #[error("global variable `{name}` is already defined, second definition at {position}")]
    GlobalAlreadyDefined { name: String, position: SourceLocation },
}

impl ParseDiagnostic {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub const fn position(&self) -> SourceLocation {
        match self {
            Self::FunctionAlreadyDefined { position, .. }
            | Self::TypeAlreadyDefined { position, .. }
            | Self::GlobalAlreadyDefined { position, .. } => *position,
        }
    }
}
