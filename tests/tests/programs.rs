// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case(
    r#"
        fn main() {
            print("Hello there");
        }
    "#,
    &[
        "Hello there",
    ],
)]
#[case(
    r#"
        int base = 40;
        int answer = base + 2;

        fn main() {
            print((string)answer);
        }
    "#,
    &[
        "42",
    ],
)]
#[case(
    r#"
        const int limit = 3;

        fn main() {
            print((string)limit);
        }
    "#,
    &[
        "3",
    ],
)]
#[case(
    r#"
        bool crowded = 1 > 2;

        fn main() {
            if (crowded) {
                print("crowded");
            } else {
                print("quiet");
            }
        }
    "#,
    &[
        "quiet",
    ],
)]
#[case(
    r#"
        fn main() {
            int x = 5;
            if (true) {
                int x = 2;
                print((string)x);
            }
            print((string)x);
        }
    "#,
    &[
        "2",
        "5",
    ],
)]
#[case(
    r#"
        fn main() {
            int i = 3;
            while (i > -2) {
                print((string)i);
                i = i - 1;
            }
        }
    "#,
    &[
        "3",
        "2",
        "1",
        "0",
        "-1",
    ],
)]
#[case(
    r#"
        fn add(int a, int b): int {
            return a + b;
        }

        fn main() {
            print((string)add(2, 3));
        }
    "#,
    &[
        "5",
    ],
)]
#[case(
    r#"
        fn main() {
            int x = 7;
            if (x < 5) {
                print("small");
            } elif (x < 10) {
                print("medium");
            } else {
                print("large");
            }
        }
    "#,
    &[
        "medium",
    ],
)]
#[case(
    r#"
        fn greet(string name) {
            print("Hi " + name);
        }

        fn main() {
            greet("Ada");
        }
    "#,
    &[
        "Hi Ada",
    ],
)]
fn output_is_captured(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|line| line.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        struct Point { int x; int y; };

        fn bump(Point p) {
            p.x = p.x + 1;
        }

        fn main() {
            Point a = Point { 1, 5 };
            bump(a);
            print((string)a.x);
        }
    "#,
    &[
        "2",
    ],
)]
#[case(
    r#"
        struct Point { int x; int y; };

        fn bump(Point p) {
            p.x = p.x + 1;
        }

        fn main() {
            Point a = Point { 1, 5 };
            bump(@a);
            print((string)a.x);
        }
    "#,
    &[
        "1",
    ],
)]
#[case(
    r#"
        struct Counter { int n; };

        fn main() {
            Counter a = Counter { 1 };
            Counter b = a;
            Counter c = @a;
            b.n = 9;
            print((string)a.n);
            print((string)c.n);
        }
    "#,
    &[
        "9",
        "1",
    ],
)]
#[case(
    r#"
        struct Point { int x; int y; };

        fn main() {
            Point p = { 3, 4 };
            print((string)p.y);
        }
    "#,
    &[
        "4",
    ],
)]
fn structs_are_reference_values(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|line| line.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        variant Shape { int side; float radius; };

        fn main() {
            Shape s = Shape::side(4);
            match (s) {
                Shape::side(n) {
                    print((string)n);
                }
                Shape::radius(r) {
                    print((string)r);
                }
            }
        }
    "#,
    &[
        "4",
    ],
)]
#[case(
    r#"
        variant Shape { int side; float radius; };

        fn main() {
            Shape s = Shape::radius(2.5);
            match (s) {
                Shape::side(n) {
                    print((string)n);
                }
                Shape::radius(r) {
                    print((string)r);
                }
            }
        }
    "#,
    &[
        "2.5",
    ],
)]
fn variants_match_on_the_active_member(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|line| line.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn both_sides_of_a_logical_operator_are_evaluated() {
    let input = r#"
        fn loud(bool b): bool {
            print("eval");
            return b;
        }

        fn main() {
            if (loud(true) or loud(false)) {
                print("yes");
            }
        }
    "#;

    assert_eq!(interpret_and_return_stdout(input), vec!["eval", "eval", "yes"]);
}

#[test]
fn a_return_unwinds_out_of_a_loop() {
    let input = r#"
        fn firstAbove(int threshold): int {
            int i = 0;
            while (true) {
                if (i > threshold) {
                    return i;
                }
                i = i + 1;
            }
        }

        fn main() {
            print((string)firstAbove(2));
        }
    "#;

    assert_eq!(interpret_and_return_stdout(input), vec!["3"]);
}

#[test]
fn a_verification_failure_is_a_single_line_on_the_sink() {
    let input = "fn main() { f(); }\nfn f() { return; }";

    assert_eq!(
        interpret_and_return_stdout(input),
        vec![
            "Error while return type checking: function `f` declares no return type \
             but contains a return statement, declared at 2:1"
        ],
    );
}

#[test]
fn recursion_is_rejected_before_execution() {
    let input = "fn main() { ping(); }\nfn ping() { ping(); }";

    assert_eq!(
        interpret_and_return_stdout(input),
        vec![
            "Error while return type checking: function calls nest deeper than 64 frames, \
             function `ping` called at 2:13"
        ],
    );
}

#[test]
fn a_runtime_failure_keeps_the_output_before_it() {
    let input = "fn main() { print(\"before\"); int x = 4 / 0; }";

    assert_eq!(
        interpret_and_return_stdout(input),
        vec!["before", "Error while interpreting: division by zero at 1:38"],
    );
}
