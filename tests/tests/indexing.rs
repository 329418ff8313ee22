// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use blunt_interpreter::RuntimeError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret_and_return_stdout, interpret_error};

#[rstest]
#[case(
    r#"
        roll 3 x = 5;
        x.1 = 9;
        println(x.0);
        println(x.1);
        println(x.2);
    "#,
    &["5", "9", "5"],
)]
#[case(
    r#"
        roll 2 y = 7;
        println(y.1);
    "#,
    &["7"],
)]
#[case(
    r#"
        roll 3 a = [1, 2, 3];
        a.0 = 10;
        println(a);
    "#,
    &["10 2 3"],
)]
#[case(
    r#"
        roll 3 a = [1, 2, 3];
        a[1 + 1] = 7;
        println(a[2]);
    "#,
    &["7"],
)]
#[case(
    r#"
        roll 3 a = [1, 2, 3];
        roll k = 2;
        a.k = 0;
        println(a);
    "#,
    &["1 2 0"],
)]
#[case(
    r#"
        roll 2 a = [1, 2];
        roll 2 b = a;
        b.0 = 9;
        println(a.0);
    "#,
    &["9"],
)]
#[case(
    r#"
        blunt make() {
            smoke [0, 0]
        }

        roll 2 a = make();
        roll 2 b = make();
        a.0 = 1;
        println(b.0);
    "#,
    &["0"],
)]
#[case(
    r#"
        roll s = "hello";
        println(s.1.3);
        println(s.1.);
        println(s.0.);
        println(s.);
    "#,
    &["el", "ello", "hello", "o"],
)]
#[case(
    r#"
        roll 4 a = [1, 2, 3, 4];
        roll 2 b = a.1.3;
        println(b);
        println(a.);
        println(a...);
    "#,
    &["2 3", "4", "1 2 3 4"],
)]
#[case(
    r#"
        roll 3 x = 1;
        x = 4;
        x.2 = 0;
        println(x);
    "#,
    &["4 4 0"],
)]
fn indexing(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case("roll 3 x = 5; println(x.3);", "x", 3, 3)]
#[case("roll 3 x = 5; x.3 = 1;", "x", 3, 3)]
#[case("roll 3 a = [1, 2, 3]; a.5 = 1;", "a", 5, 3)]
#[case("roll 3 a = [1]; println(a.2);", "a", 2, 1)]
#[case("roll 3 a = [1]; a[2] = 0;", "a", 2, 1)]
#[case("roll 3 a = [1, 2, 3]; println(a[0 - 1]);", "a", -1, 3)]
#[case("roll 3 a = [1, 2, 3]; roll k = 7; a.k = 1;", "a", 7, 3)]
#[case("roll a = [1, 2, 3]; println(a.1);", "a", 1, 1)]
fn index_out_of_bounds(#[case] input: &str, #[case] name: &str, #[case] index: i64, #[case] count: usize) {
    match interpret_error(input) {
        RuntimeError::IndexOutOfBounds { name: actual_name, index: actual_index, count: actual_count } => {
            assert_eq!((actual_name.as_str(), actual_index, actual_count), (name, index, count));
        }
        e => panic!("Expected an out of bounds error, got {e:?}"),
    }
}

#[rstest]
#[case(r#"roll s = "abc"; println(s.2.5);"#)]
#[case(r#"roll s = "abc"; println(s.2.1);"#)]
#[case("roll 2 a = [1, 2]; println(a.0.3);")]
fn slice_out_of_bounds(#[case] input: &str) {
    assert!(matches!(interpret_error(input), RuntimeError::SliceOutOfBounds { .. }));
}

#[test]
fn slicing_an_integer() {
    let error = interpret_error("roll n = 5; println(n.0.1);");
    assert!(matches!(error, RuntimeError::UnsliceableValue { .. }));
}

#[rstest]
#[case(r#"roll s = ""; println(s.);"#)]
#[case("roll a = []; println(a.);")]
fn last_element_of_nothing(#[case] input: &str) {
    assert!(matches!(interpret_error(input), RuntimeError::EmptyValue { .. }));
}

#[test]
fn index_must_be_an_integer() {
    let error = interpret_error(r#"roll 2 a = [1, 2]; println(a.("one"));"#);
    assert!(matches!(error, RuntimeError::ExpectedInteger { .. }));
}
