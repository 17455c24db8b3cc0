// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{
    Builtin, Expression, ExpressionKind, FunctionDefinition, Program, SourceLocation, Statement, StatementKind,
    TypeDeclaration,
};

/// The name of the function the interpreter starts in.
pub const MAIN_FUNCTION_NAME: &str = "main";

/// How deep function calls may nest before execution is aborted.
pub const MAX_CALL_DEPTH: usize = 64;

pub type ReturnCheckResult = Result<(), ReturnCheckError>;

/// Walks every call reachable from `main` and rejects `return` statements
/// that do not fit the enclosing function, before anything is executed.
pub struct ReturnTypeChecker<'program> {
    program: &'program Program,
    stack: Vec<CallFrame<'program>>,
}

struct CallFrame<'program> {
    function: &'program str,
    position: SourceLocation,
    return_type: Option<&'program TypeDeclaration>,
}

impl<'program> ReturnTypeChecker<'program> {
    #[must_use]
    pub fn new(program: &'program Program) -> Self {
        Self {
            program,
            stack: Vec::new(),
        }
    }

    pub fn check(mut self) -> ReturnCheckResult {
        self.check_call(MAIN_FUNCTION_NAME, SourceLocation::START)?;

        debug_assert!(self.stack.is_empty());
        Ok(())
    }

    fn check_call(&mut self, name: &str, position: SourceLocation) -> ReturnCheckResult {
        let Some(function) = self.program.functions.get(name) else {
            if Builtin::function(name).is_some() {
                return Ok(());
            }

            return Err(ReturnCheckError::FunctionNotDefined {
                name: name.to_string(),
                position,
            });
        };

        if self.stack.len() >= MAX_CALL_DEPTH {
            return Err(ReturnCheckError::StackLimitReached {
                function: function.name.clone(),
                position,
            });
        }

        self.stack.push(CallFrame {
            function: &function.name,
            position: function.position,
            return_type: function.return_type.as_ref(),
        });
        let result = self.check_function(function);
        self.stack.pop();

        result
    }

    fn check_function(&mut self, function: &'program FunctionDefinition) -> ReturnCheckResult {
        for statement in &function.body.statements {
            self.check_statement(statement)?;
        }

        Ok(())
    }

    fn check_statement(&mut self, statement: &'program Statement) -> ReturnCheckResult {
        match &statement.kind {
            StatementKind::Declaration(declaration) | StatementKind::ConstDeclaration(declaration) => {
                self.check_expression(&declaration.initializer)
            }

            StatementKind::Assignment(assignment) => self.check_expression(&assignment.value),

            StatementKind::MemberAssignment(assignment) => self.check_expression(&assignment.value),

            StatementKind::Expression(expression) => self.check_expression(expression),

            StatementKind::If(if_statement) => {
                for condition in &if_statement.conditions {
                    self.check_expression(condition)?;
                }
                for block in &if_statement.blocks {
                    for statement in &block.statements {
                        self.check_statement(statement)?;
                    }
                }
                if let Some(else_block) = &if_statement.else_block {
                    for statement in &else_block.statements {
                        self.check_statement(statement)?;
                    }
                }
                Ok(())
            }

            StatementKind::While(while_statement) => {
                self.check_expression(&while_statement.condition)?;
                for statement in &while_statement.block.statements {
                    self.check_statement(statement)?;
                }
                Ok(())
            }

            StatementKind::Match(match_statement) => {
                self.check_expression(&match_statement.subject)?;
                for arm in &match_statement.arms {
                    for statement in &arm.block.statements {
                        self.check_statement(statement)?;
                    }
                }
                Ok(())
            }

            StatementKind::Return(return_statement) => {
                let Some(frame) = self.stack.last() else {
                    return Err(ReturnCheckError::ReturnOutsideFunction {
                        position: statement.position,
                    });
                };

                if frame.return_type.is_none() {
                    return Err(ReturnCheckError::ReturnInVoidFunction {
                        function: frame.function.to_string(),
                        position: frame.position,
                    });
                }

                match &return_statement.value {
                    Some(value) => self.check_expression(value),
                    None => Ok(()),
                }
            }
        }
    }

    fn check_expression(&mut self, expression: &'program Expression) -> ReturnCheckResult {
        match &expression.kind {
            ExpressionKind::IntegerLiteral(..)
            | ExpressionKind::FloatLiteral(..)
            | ExpressionKind::BooleanLiteral(..)
            | ExpressionKind::StringLiteral(..)
            | ExpressionKind::Identifier(..)
            | ExpressionKind::Member { .. } => Ok(()),

            ExpressionKind::Negate(operand) | ExpressionKind::LogicalNot(operand) => self.check_expression(operand),

            ExpressionKind::Arithmetic { lhs, rhs, .. }
            | ExpressionKind::Comparison { lhs, rhs, .. }
            | ExpressionKind::Logical { lhs, rhs, .. } => {
                self.check_expression(lhs)?;
                self.check_expression(rhs)
            }

            ExpressionKind::Cast { operand, .. } => self.check_expression(operand),

            ExpressionKind::Copied(operand) => self.check_expression(operand),

            ExpressionKind::StructLiteral { values, .. } => {
                for value in values {
                    self.check_expression(value)?;
                }
                Ok(())
            }

            ExpressionKind::VariantLiteral { value, .. } => self.check_expression(value),

            ExpressionKind::FunctionCall { name, arguments } => {
                for argument in arguments {
                    self.check_expression(argument)?;
                }
                self.check_call(name, expression.position)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error, strum::AsRefStr)]
pub enum ReturnCheckError {
    #[error("function `{name}` is not defined, called at {position}")]
    FunctionNotDefined { name: String, position: SourceLocation },

    #[error("function `{function}` declares no return type but contains a return statement, declared at {position}")]
    ReturnInVoidFunction { function: String, position: SourceLocation },

    #[error("return statement outside of a function at {position}")]
    ReturnOutsideFunction { position: SourceLocation },

    #[error("function calls nest deeper than {MAX_CALL_DEPTH} frames, function `{function}` called at {position}")]
    StackLimitReached { function: String, position: SourceLocation },
}

impl ReturnCheckError {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub const fn position(&self) -> SourceLocation {
        match self {
            Self::FunctionNotDefined { position, .. }
            | Self::ReturnInVoidFunction { position, .. }
            | Self::ReturnOutsideFunction { position }
            | Self::StackLimitReached { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Lexer, Parser};

    use super::*;

    fn check(input: &str) -> ReturnCheckResult {
        let (tokens, errors) = Lexer::new(input).collect_all();
        assert!(errors.is_empty(), "lexer errors: {errors:?}");

        let mut parser = Parser::new(&tokens);
        let program = parser.parse_program().expect("the program must parse");
        assert!(parser.diagnostics().is_empty());

        ReturnTypeChecker::new(&program).check()
    }

    #[rstest]
    #[case("fn main() { print(\"hi\"); }")]
    #[case("fn main() { int x = 5; }")]
    #[case("fn f(): int { return 5; }\nfn main() { int x = f(); }")]
    #[case("fn f(): int { return; }\nfn main() { int x = f(); }")]
    #[case("fn unused() { return; }\nfn main() { }")]
    fn valid_programs(#[case] input: &str) {
        assert_eq!(check(input), Ok(()));
    }

    #[test]
    fn missing_main_is_reported() {
        let error = check("fn helper() { }").expect_err("main is missing");

        assert_eq!(
            error,
            ReturnCheckError::FunctionNotDefined {
                name: String::from("main"),
                position: SourceLocation::START,
            }
        );
    }

    #[test]
    fn unknown_call_is_reported_with_the_call_site() {
        let error = check("fn main() { missing(); }").expect_err("the callee is missing");

        assert_eq!(
            error,
            ReturnCheckError::FunctionNotDefined {
                name: String::from("missing"),
                position: SourceLocation::new(1, 13),
            }
        );
    }

    #[test]
    fn return_in_void_function_is_reported() {
        let error = check("fn main() { f(); }\nfn f() { return; }").expect_err("f returns without a type");

        assert_eq!(
            error,
            ReturnCheckError::ReturnInVoidFunction {
                function: String::from("f"),
                position: SourceLocation::new(2, 1),
            }
        );
    }

    #[test]
    fn the_offending_function_is_named_through_nested_calls() {
        let input = "fn main() { a(); }\n\
                     fn a() { b(); }\n\
                     fn b() { c(); }\n\
                     fn c() { if (true) { return 1; } }";
        let error = check(input).expect_err("c returns a value without a type");

        assert_eq!(
            error,
            ReturnCheckError::ReturnInVoidFunction {
                function: String::from("c"),
                position: SourceLocation::new(4, 1),
            }
        );
    }

    #[test]
    fn a_deeply_nested_return_is_still_attributed() {
        let input = "fn main() { f(); }\n\
                     fn f() { if (true) { while (false) { if (true) { return 5; } } } }";
        let error = check(input).expect_err("f returns a value without a type");

        assert_eq!(
            error,
            ReturnCheckError::ReturnInVoidFunction {
                function: String::from("f"),
                position: SourceLocation::new(2, 1),
            }
        );
    }

    #[test]
    fn calls_inside_expressions_are_walked() {
        let error = check("fn main() { int x = 1 + probe(); }").expect_err("probe is missing");

        assert!(matches!(
            error,
            ReturnCheckError::FunctionNotDefined { name, .. } if name == "probe"
        ));
    }

    #[test]
    fn recursion_overflows_the_check_stack() {
        let error = check("fn main() { main(); }").expect_err("the recursion never ends");

        assert_eq!(
            error,
            ReturnCheckError::StackLimitReached {
                function: String::from("main"),
                position: SourceLocation::new(1, 13),
            }
        );
    }

    #[test]
    fn deep_but_finite_nesting_passes() {
        let mut input = String::from("fn main() { f1(); }\n");
        for depth in 1..60 {
            input.push_str(&format!("fn f{depth}() {{ f{}(); }}\n", depth + 1));
        }
        input.push_str("fn f60() { print(\"deep\"); }\n");

        assert_eq!(check(&input), Ok(()));
    }

    #[test]
    fn calls_in_match_arms_are_walked() {
        let input = "variant V { int a; };\n\
                     fn main() {\n\
                         V v = V::a(1);\n\
                         match (v) {\n\
                             V::a(x) { ghost(); }\n\
                         }\n\
                     }";
        let error = check(input).expect_err("ghost is missing");

        assert!(matches!(
            error,
            ReturnCheckError::FunctionNotDefined { name, .. } if name == "ghost"
        ));
    }
}
