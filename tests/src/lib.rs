// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::Write;

use sprak::{Lexer, Parser, Program, ReturnTypeChecker, Token};
use sprak_interpreter::{Interpreter, RuntimeError, Value};

fn tokenize(input: &str) -> Vec<Token> {
    let (tokens, errors) = Lexer::new(input).collect_all();
    assert!(errors.is_empty(), "Lexer errors: {errors:#?}");
    tokens
}

fn parse(input: &str) -> Program {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens);
    let program = parser.parse_program().unwrap();
    assert!(
        parser.diagnostics().is_empty(),
        "Diagnostics: {:#?}",
        parser.diagnostics()
    );

    program
}

/// Runs the whole pipeline and captures the output sink, line by line. A
/// verification or runtime failure shows up as its diagnostic line.
pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    let program = parse(input);
    let mut buffer = Vec::new();

    if let Err(error) = ReturnTypeChecker::new(&program).check() {
        _ = writeln!(buffer, "Error while return type checking: {error}");
    } else {
        _ = Interpreter::new(&program, &mut buffer).run();
    }

    String::from_utf8(buffer)
        .unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect()
}

/// Runs a program without the verification pass and hands back the error it
/// stops with.
pub fn interpret_error(input: &str) -> RuntimeError {
    let program = parse(input);
    Interpreter::new(&program, Vec::new()).execute().unwrap_err()
}

pub fn interpret_expression(input: &str) -> Value {
    evaluate_expression(input).unwrap()
}

pub fn expression_error(input: &str) -> RuntimeError {
    evaluate_expression(input).unwrap_err()
}

fn evaluate_expression(input: &str) -> Result<Value, RuntimeError> {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens);
    let expression = parser.parse_expression().unwrap();
    assert!(parser.is_at_end());

    let program = Program::new();
    Interpreter::new(&program, Vec::new()).evaluate_expression(&expression)
}
