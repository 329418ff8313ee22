// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use blunt_interpreter::Value;
use rstest::rstest;
use tests::interpret_expression;

#[rstest]
#[case("1 + 2 * 3", 7)]
#[case("(1 + 2) * 3", 9)]
#[case("10 - 2 - 3", 5)]
#[case("7 / 2", 3)]
#[case("1 == 1 and 0", 0)]
#[case("2 * 3 == 3", 2)]
#[case("3 > 2 or 0", 1)]
#[case("2 >= 3", 0)]
#[case("2 <= 2", 1)]
#[case("1 < 2 and 2 < 3", 1)]
#[case("not 0", 1)]
#[case("not 5", 0)]
#[case("not 1 + 1", 1)]
#[case("not (1 == 2)", 1)]
#[case("0 - 5 * 2", -10)]
fn integer_expressions(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(interpret_expression(input), Value::Integer(expected));
}

#[test]
fn string_concatenation() {
    assert_eq!(interpret_expression(r#""ab" + "cd""#), Value::String("abcd".into()));
}

#[rstest]
#[case(r#""a" - "b""#)]
#[case(r#""a" == "a""#)]
#[case(r#"1 + "a""#)]
#[case(r#"[1] + [2]"#)]
fn unsupported_operands_are_noop(#[case] input: &str) {
    assert_eq!(interpret_expression(input), Value::Noop);
}

#[test]
fn array_literal() {
    assert_eq!(
        interpret_expression("[1, \"two\", [3]]"),
        Value::new_array(vec![
            Value::Integer(1),
            Value::String("two".into()),
            Value::new_array(vec![Value::Integer(3)]),
        ])
    );
}
