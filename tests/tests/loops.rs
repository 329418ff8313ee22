// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use blunt_interpreter::RuntimeError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret_and_return_stdout, interpret_error};

#[rstest]
#[case(
    r#"
        roll 3 x = 0;
        light x {
            println(i);
        }
    "#,
    &["0", "1", "2"],
)]
#[case(
    r#"
        roll 3 xs = [10, 20, 30];
        light xs {
            println(xs.i);
        }
    "#,
    &["10", "20", "30"],
)]
#[case(
    r#"
        roll x = 0;
        light x using j < 3 {
            print(j);
        }
        println("");
    "#,
    &["012"],
)]
#[case(
    r#"
        roll k = 2;
        roll 5 xs = 0;
        light xs using k < 4 {
            print(k);
        };
        println(k);
    "#,
    &["234"],
)]
#[case(
    r#"
        roll 2 a = 0;
        roll 3 b = 0;
        light a {
            light b {
                print(i);
            }
        }
        println("");
    "#,
    &["012"],
)]
#[case(
    r#"
        roll 2 x = 0;
        light x {
            roll 5 x = 0;
            print(i);
        }
        println("");
    "#,
    &["01"],
)]
fn loops(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn smoke_inside_a_loop_leaves_the_function() {
    let output = interpret_and_return_stdout(r#"
        blunt find() {
            roll 5 xs = 0;
            light xs {
                if (i == 3) {
                    smoke i
                }
            }
            smoke 99
        }

        println(find());
    "#);

    assert_eq!(output, vec!["3".to_string()]);
}

#[test]
fn iterator_is_scoped_to_the_loop() {
    let error = interpret_error(r#"
        roll 2 x = 0;
        light x {
            print(i);
        }
        println(i);
    "#);

    assert!(matches!(error, RuntimeError::UndefinedVariable { name } if name == "i"));
}

#[test]
fn loop_over_an_undefined_variable() {
    let error = interpret_error(r#"
        light nothing {
            print(i);
        }
    "#);

    assert!(matches!(error, RuntimeError::UndefinedVariable { name } if name == "nothing"));
}

#[test]
fn non_integer_loop_condition() {
    let error = interpret_error(r#"
        roll x = 0;
        light x using j + "a" {
            print(j);
        }
    "#);

    assert!(matches!(error, RuntimeError::ExpectedInteger { .. }));
}
