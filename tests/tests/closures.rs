// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use blunt_interpreter::RuntimeError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret_and_return_stdout, interpret_error};

const COUNTER: &str = r#"
    blunt counter(start) {
        keep start
        blunt next() {
            start = start + 1;
            smoke start
        }
        blunt get() {
            smoke start
        }
    }
"#;

#[rstest]
#[case(
    r#"
        roll c = counter(5);
        println(c.get());
    "#,
    &["5"],
)]
#[case(
    r#"
        roll c = counter(0);
        println(c.next());
        println(c.next());
        println(c.get());
    "#,
    &["1", "2", "2"],
)]
#[case(
    r#"
        roll a = counter(0);
        roll b = counter(10);
        a.next();
        println(a.next());
        println(b.next());
    "#,
    &["2", "11"],
)]
fn counter(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(&format!("{COUNTER}{input}")), expected);
}

#[rstest]
#[case(
    r#"
        blunt adder(n) {
            blunt add(m) {
                smoke n + m
            }
        }

        roll a = adder(2);
        println(a.add(3));
    "#,
    &["5"],
)]
#[case(
    r#"
        blunt f(x) {
            x = x + 1;
            blunt get() {
                smoke x
            }
        }

        roll r = f(1);
        println(r.get());
    "#,
    &["2"],
)]
#[case(
    r#"
        blunt counter(start) {
            blunt next() {
                start = start + 1;
                smoke start
            }
        }

        roll c = counter(0);
        c.next();
        println(c.next());
    "#,
    &["2"],
)]
fn parameters_are_kept_without_keep(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        blunt adder(n) {
            keep n
            blunt add(m) {
                smoke n + m
            }
        }

        roll a = adder(2);
        println(a.add(3));
    "#,
    &["5"],
)]
#[case(
    r#"
        blunt f(x) {
            keep x;
            x = x + 1;
            keep x;
            blunt get() {
                smoke x
            }
        }

        roll r = f(1);
        println(r.get());
    "#,
    &["2"],
)]
#[case(
    r#"
        blunt helper() {
            smoke 1
        }

        blunt f(x) {
            helper();
            keep x;
            blunt get() {
                smoke x
            }
        }

        roll r = f(3);
        println(r.get());
    "#,
    &["3"],
)]
#[case(
    r#"
        blunt pair(a, b) {
            keep a
            keep b
            blunt sum() {
                smoke a + b
            }
            blunt sum() {
                smoke a * b
            }
        }

        roll p = pair(3, 4);
        println(p.sum());
    "#,
    &["12"],
)]
fn keep_and_dot_call(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn dot_call_on_a_plain_value() {
    let error = interpret_error(r#"
        blunt f() {
            smoke 4
        }

        roll r = f();
        r.get();
    "#);

    assert!(matches!(error, RuntimeError::NotARuntimeFunction { name, method } if name == "r" && method == "get"));
}

#[test]
fn dot_call_of_a_missing_nested_function() {
    let error = interpret_error(r#"
        blunt f() {
            roll a = 1
        }

        roll r = f();
        r.nope();
    "#);

    assert!(matches!(error, RuntimeError::NestedFunctionNotFound { function, method } if function == "f" && method == "nope"));
}

#[test]
fn keep_outside_a_function() {
    let error = interpret_error("roll x = 1; keep x");
    assert!(matches!(error, RuntimeError::SaveOutsideFunction { name } if name == "x"));
}

#[test]
fn keep_of_an_undefined_variable() {
    let error = interpret_error(r#"
        blunt f() {
            keep nothing
        }

        f();
    "#);

    assert!(matches!(error, RuntimeError::UndefinedVariable { name } if name == "nothing"));
}
