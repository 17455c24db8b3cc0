// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::{expression_error, interpret_error};

#[rstest]
#[case("1 / 0", "ZeroDivision")]
#[case("1 % 0", "ZeroDivision")]
#[case("1.5 / 0.0", "ZeroDivision")]
#[case("7.5 % 0.0", "ZeroDivision")]
#[case("2147483647 + 1", "IntegerOverflow")]
#[case("(0 - 2147483647 - 1) / -1", "IntegerOverflow")]
#[case("-(0 - 2147483647 - 1)", "IntegerOverflow")]
#[case("2147483647 * 2", "IntegerOverflow")]
fn arithmetic_failures(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(expression_error(input).name(), expected);
}

#[rstest]
#[case("1 + 1.5", "TypesDoNotMatch")]
#[case("1.5 + 1", "TypesDoNotMatch")]
#[case("\"a\" + 1", "TypesDoNotMatch")]
#[case("true + 1", "ArithmeticNotSupported")]
#[case("-true", "ArithmeticNotSupported")]
#[case("\"a\" - \"b\"", "OperationNotSupported")]
#[case("\"a\" < \"b\"", "CompareNotSupported")]
#[case("\"a\" < 5", "CompareNotSupported")]
#[case("true < false", "CompareNotSupported")]
#[case("1 == 1.0", "TypesDoNotMatch")]
#[case("5 and true", "TypesDoNotMatch")]
#[case("true or 5", "TypesDoNotMatch")]
#[case("not 1", "TypesDoNotMatch")]
#[case("(bool)1", "UnsupportedCast")]
fn mixed_operands_are_rejected(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(expression_error(input).name(), expected);
}

#[rstest]
#[case("fn main() { const int x = 1; x = 2; }", "ReassignConstVariable")]
#[case("fn main() { x = 5; }", "NoVariable")]
#[case("fn main() { int y = x; }", "NoVariable")]
#[case("fn main() { int x = true; }", "TypesDoNotMatch")]
#[case("fn main() { int x = 1; int x = 2; }", "DuplicatedVariable")]
#[case("fn main() { if (1) { print(\"\"); } }", "TypesDoNotMatch")]
#[case("fn main() { missing(); }", "FunctionNotDefined")]
#[case("int x = 5;", "FunctionNotDefined")]
#[case("fn main() { print(); }", "InvalidNumberOfArguments")]
#[case("fn main() { print(5); }", "TypesDoNotMatch")]
fn statement_failures(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_error(input).name(), expected);
}

#[rstest]
#[case(
    "fn shout() { print(\"hi\"); }\nfn main() { int x = shout(); }",
    "ExpressionDidNotEvaluate"
)]
#[case("fn f(): int { return; }\nfn main() { int x = f(); }", "FunctionDidNotReturnValue")]
#[case("fn f(): int { print(\"x\"); }\nfn main() { int x = f(); }", "FunctionDidNotReturn")]
#[case("fn f(): int { return true; }\nfn main() { int x = f(); }", "TypesDoNotMatch")]
#[case("fn f(int a) { print((string)a); }\nfn main() { f(true); }", "TypesDoNotMatch")]
#[case("fn f(int a) { print((string)a); }\nfn main() { f(); }", "InvalidNumberOfArguments")]
#[case("fn f() { f(); }\nfn main() { f(); }", "StackLimitReached")]
fn call_failures(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_error(input).name(), expected);
}

#[rstest]
#[case(
    "struct Point { int x; int y; };\nfn main() { Point p = Point { 1 }; }",
    "InvalidNumberOfArguments"
)]
#[case(
    "struct Point { int x; int y; };\nfn main() { Point p = Point { 1, true }; }",
    "TypesDoNotMatch"
)]
#[case("fn main() { Missing m = Missing { 1 }; }", "TypeNotDefined")]
#[case(
    "variant Shape { int side; };\nfn main() { Shape s = Shape { 1 }; }",
    "UnexpectedType"
)]
#[case("fn main() { int x = 1; x = { 2 }; }", "UnexpectedType")]
#[case(
    "struct Point { int x; int y; };\nfn main() { Point p = Point::x(1); }",
    "NotAVariantType"
)]
#[case(
    "variant Shape { int side; };\nfn main() { Shape s = Shape::corner(1); }",
    "InvalidVariantMember"
)]
#[case(
    "struct Point { int x; int y; };\nfn main() { int n = 1; int y = n.x; }",
    "NoStructMember"
)]
fn type_failures(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_error(input).name(), expected);
}

#[rstest]
#[case(
    "variant Shape { int side; float radius; };\n\
     fn main() { Shape s = Shape::radius(1.5); match (s) { Shape::side(n) { print(\"\"); } } }",
    "NoMatchingArm"
)]
#[case("fn main() { int x = 1; match (x) { } }", "InvalidTypeForMatch")]
fn match_failures(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_error(input).name(), expected);
}

#[test]
fn a_const_argument_stays_const_in_the_callee() {
    let input = "struct Point { int x; int y; };\n\
                 fn poke(Point p) { p.x = 9; }\n\
                 fn main() { const Point a = Point { 1, 2 }; poke(a); }";

    assert_eq!(interpret_error(input).name(), "ReassignConstVariable");
}
