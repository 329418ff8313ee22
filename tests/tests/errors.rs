// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use blunt::{LexerErrorKind, ParseError, TokenKind};
use blunt_interpreter::{ErrorCategory, RuntimeError};
use rstest::rstest;
use tests::{interpret_error, parse_error};

#[rstest]
#[case("println(nope);", ErrorCategory::Name)]
#[case("nope();", ErrorCategory::Name)]
#[case("blunt f(a, b) { smoke a } f(1);", ErrorCategory::Arity)]
#[case("len();", ErrorCategory::Arity)]
#[case(r#"if ("yes") { println(1) }"#, ErrorCategory::Type)]
#[case(r#"roll x = not "a";"#, ErrorCategory::Type)]
#[case("len(1);", ErrorCategory::Type)]
#[case("blunt f() { roll a = 1 } println(f());", ErrorCategory::Type)]
#[case("roll 2 x = 0; println(x.2);", ErrorCategory::Bounds)]
#[case("roll x = 1; keep x;", ErrorCategory::State)]
#[case("roll x = 1 / 0;", ErrorCategory::Arithmetic)]
fn runtime_error_categories(#[case] input: &str, #[case] expected: ErrorCategory) {
    let error = interpret_error(input);
    assert_eq!(error.category(), expected, "Unexpected category for {error:?}");
}

#[test]
fn missing_argument_names_the_parameter() {
    let error = interpret_error("blunt f(a, b) { smoke a } f(1);");
    assert!(matches!(error, RuntimeError::MissingArgument { function, parameter } if function == "f" && parameter == "b"));
}

#[rstest]
#[case("roll 4611686018427387904 x = 1; x.0 = 2;", 4611686018427387904)]
#[case("roll 9223372036854775807 x = 1; x.5 = 2;", 9223372036854775807)]
fn promoting_a_huge_count_is_an_error(#[case] input: &str, #[case] expected: usize) {
    let error = interpret_error(input);
    assert!(matches!(&error, RuntimeError::TooManyValues { name, count } if name == "x" && *count == expected), "Unexpected error {error:?}");
    assert_eq!(error.category(), ErrorCategory::Bounds);
}

#[test]
fn division_by_zero() {
    assert!(matches!(interpret_error("roll a = 0; println(5 / a);"), RuntimeError::DivisionByZero));
}

#[test]
fn printing_a_function_result() {
    let error = interpret_error("blunt f() { roll a = 1 } println(f());");
    assert_eq!(error.to_string(), "Unsupported type for printing: function");
}

#[test]
fn output_before_an_error_is_kept() {
    let tree = tests::parse("print(1); println(nope);");
    let mut interpreter = blunt_interpreter::Interpreter::new(Vec::new());

    assert!(interpreter.execute_tree(&tree).is_err());
    assert_eq!(interpreter.into_output(), b"1");
}

#[rstest]
#[case("roll 0 x = 1")]
#[case("roll x 1")]
#[case("keep 1")]
#[case("")]
#[case("blunt f( { }")]
#[case("if 1 { println(1) }")]
#[case("blunt f() { }")]
#[case("}")]
#[case("println(1")]
fn syntax_errors(#[case] input: &str) {
    let error = parse_error(input);
    assert_eq!(error.category(), "SyntaxError", "Unexpected error {error:?}");
}

#[test]
fn expected_token_names_what_was_expected() {
    match parse_error("roll x 1") {
        ParseError::ExpectedToken { expected, token, .. } => {
            assert_eq!(expected, TokenKind::Equals);
            assert_eq!(token.kind, TokenKind::Integer);
        }
        e => panic!("Unexpected error {e:?}"),
    }
}

#[rstest]
#[case("roll x = 1 @ 2", LexerErrorKind::UnrecognizedCharacter { character: '@' })]
#[case("println(\"abc", LexerErrorKind::UnterminatedString)]
fn lexical_errors(#[case] input: &str, #[case] expected: LexerErrorKind) {
    match parse_error(input) {
        ParseError::Lexer(error) => assert_eq!(error.kind, expected),
        e => panic!("Unexpected error {e:?}"),
    }
}
