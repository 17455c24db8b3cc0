// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use sprak_interpreter::Value;
use tests::interpret_expression;

#[rstest]
#[case("10", Value::Integer(10))]
#[case("5 + 2", Value::Integer(7))]
#[case("4 * 9", Value::Integer(36))]
#[case("52 % 30", Value::Integer(22))]
#[case("7 / 2", Value::Integer(3))]
#[case("-7 / 2", Value::Integer(-3))]
fn binary_operations(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("10 * 4 + 5", Value::Integer(45))]
#[case("10 + 4 + 5", Value::Integer(19))]
#[case("10 + 4 * 5", Value::Integer(30))]
#[case("10 - 4 - 5", Value::Integer(1))]
#[case("(10 - 4) * 5", Value::Integer(30))]
fn precedence(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("1.5 + 2.25", Value::Float(3.75))]
#[case("0.5 * 4.0", Value::Float(2.0))]
#[case("-1.5 - 1.5", Value::Float(-3.0))]
#[case("7.5 % 2.0", Value::Float(1.5))]
fn float_arithmetic(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("\"foo\" + \"bar\"", Value::String(String::from("foobar")))]
#[case("\"\" + \"x\"", Value::String(String::from("x")))]
fn string_concatenation(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("5 < 6", Value::Bool(true))]
#[case("6 <= 6", Value::Bool(true))]
#[case("5 > 6", Value::Bool(false))]
#[case("6 >= 7", Value::Bool(false))]
#[case("5 == 5", Value::Bool(true))]
#[case("5 != 5", Value::Bool(false))]
#[case("1.5 < 2.5", Value::Bool(true))]
#[case("\"a\" == \"a\"", Value::Bool(true))]
#[case("\"a\" != \"b\"", Value::Bool(true))]
fn comparisons(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("true and false", Value::Bool(false))]
#[case("true and true", Value::Bool(true))]
#[case("false or true", Value::Bool(true))]
#[case("false or false", Value::Bool(false))]
#[case("not false", Value::Bool(true))]
#[case("not 5 < 6", Value::Bool(false))]
#[case("1 < 2 and 3 < 4", Value::Bool(true))]
fn logic(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("(int)2.9", Value::Integer(2))]
#[case("(int)-2.9", Value::Integer(-2))]
#[case("(int)true", Value::Integer(1))]
#[case("(int)\"\"", Value::Integer(0))]
#[case("(int)\"full\"", Value::Integer(1))]
#[case("(float)3", Value::Float(3.0))]
#[case("(float)false", Value::Float(0.0))]
#[case("(string)42", Value::String(String::from("42")))]
#[case("(string)1.0", Value::String(String::from("1.0")))]
#[case("(string)2.5", Value::String(String::from("2.5")))]
#[case("(string)true", Value::String(String::from("true")))]
fn casts(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("-(3 + 4)", Value::Integer(-7))]
#[case("(int)-1", Value::Integer(-1))]
#[case("-1.5", Value::Float(-1.5))]
fn negation(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}
