// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case(
    r#"
        println("Hello!");
    "#,
    &[
        "Hello!",
    ],
)]
#[case(
    r#"
        print(1) print(2)
        println(3)
    "#,
    &[
        "123",
    ],
)]
#[case(
    r#"
        roll 2 pair = [2, 3];
        println("a", 1, pair);
    "#,
    &[
        "a 1 2 3",
    ],
)]
#[case(
    r#"
        println("a\tb", "c\\d", "say \"hi\"");
    "#,
    &[
        "a\tb c\\d say \"hi\"",
    ],
)]
#[case(
    r#"
        println(len("abc"), len([1, 2]));
    "#,
    &[
        "4 2",
    ],
)]
#[case(
    r#"
        # Comments run to the end of the line
        println(1); # even after a statement
    "#,
    &[
        "1",
    ],
)]
#[case(
    r#"
        roll x with 3;
        x with x + 1;
        println(x);
    "#,
    &[
        "4",
    ],
)]
#[case(
    r#"
        roll x = 5;
        if (x > 3) {
            println("big");
        } elseif (x > 1) {
            println("medium");
        } else {
            println("small");
        }

        if (x < 3) {
            println("small");
        } elseif (x == 5) {
            println("five");
        }

        if (0) {
            println("never");
        }
    "#,
    &[
        "big",
        "five",
    ],
)]
#[case(
    r#"
        blunt f() {
            if (1) {
                smoke 42;
            }
            smoke 0;
        }

        println(f());
    "#,
    &[
        "42",
    ],
)]
#[case(
    r#"
        blunt fact(n) {
            if (n < 2) {
                smoke 1
            }
            smoke n * fact(n - 1)
        }

        println(fact(5));
    "#,
    &[
        "120",
    ],
)]
#[case(
    r#"
        blunt f(a) {
            println(a);
        }

        f(1, 2);
    "#,
    &[
        "1",
    ],
)]
#[case(
    r#"
        println("greeting" + ", " + "world");
    "#,
    &[
        "greeting, world",
    ],
)]
fn interpret_and_return_stdout_tests(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn top_level_smoke_ends_the_program() {
    let output = interpret_and_return_stdout(r#"
        println(1);
        smoke 0;
        println(2);
    "#);

    assert_eq!(output, vec!["1".to_string()]);
}

#[test]
fn exit_stops_the_program() {
    let output = interpret_and_return_stdout(r#"
        blunt stop() {
            exit();
        }

        println("before");
        stop();
        println("after");
    "#);

    assert_eq!(output, vec!["before".to_string()]);
}
