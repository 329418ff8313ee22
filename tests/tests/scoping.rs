// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use blunt_interpreter::{RuntimeError, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret_and_return_stdout, interpret_error, interpret_program};

#[rstest]
#[case(
    r#"
        blunt f() {
            println(g);
        }

        roll g = 7;
        f();
    "#,
    &["7"],
)]
#[case(
    r#"
        roll a = 1;
        blunt f(a) {
            println(a);
        }

        f(2);
        println(a);
    "#,
    &["2", "1"],
)]
#[case(
    r#"
        roll a = 1;
        blunt f() {
            a = 5;
        }

        f();
        println(a);
    "#,
    &["5"],
)]
#[case(
    r#"
        roll a = 1;
        blunt f() {
            roll a = 5;
        }

        f();
        println(a);
    "#,
    &["1"],
)]
#[case(
    r#"
        blunt f() {
            println("first");
        }
        blunt f() {
            println("second");
        }

        f();
    "#,
    &["second"],
)]
fn scoping(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn locals_disappear_after_the_call() {
    let error = interpret_error(r#"
        blunt f() {
            roll inner = 1;
        }

        f();
        println(inner);
    "#);

    assert!(matches!(error, RuntimeError::UndefinedVariable { name } if name == "inner"));
}

#[test]
fn nested_functions_stay_local() {
    let error = interpret_error(r#"
        blunt outer() {
            blunt inner() {
                println(1)
            }
            inner()
        }

        outer();
        inner();
    "#);

    assert!(matches!(error, RuntimeError::UndefinedFunction { name } if name == "inner"));
}

#[test]
fn top_level_definitions_are_global() {
    let interpreter = interpret_program(r#"
        roll 2 x = 4;
        blunt f() {
            roll y = 1;
        }
        f();
    "#);

    let scopes = interpreter.scopes();
    assert_eq!(scopes.depth(), 0);

    let x = scopes.global().find_variable("x").unwrap().borrow().clone();
    assert_eq!(x.value, Value::Integer(4));
    assert_eq!(x.count, 2);

    assert!(scopes.global().find_function("f").is_some());
    assert!(scopes.global().find_variable("y").is_none());
}

#[test]
fn arguments_keep_the_count_of_their_variable() {
    let output = interpret_and_return_stdout(r#"
        blunt second(values) {
            println(values.1);
        }

        roll 3 xs = [1, 2, 3];
        second(xs);
    "#);

    assert_eq!(output, vec!["2".to_string()]);
}
