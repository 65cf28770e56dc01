use std::path::Path;

use rstest::rstest;
use waffle::LexErrorKind;
use waffle::printer;
use waffle::scanner;
use waffle::scanner::lexer::Lexer;
use waffle::scanner::token::Token;
use waffle::source;

fn kinds(source: &str) -> Vec<Token> {
    scanner::scan(source)
        .expect("scan should succeed")
        .into_iter()
        .map(|t| t.token)
        .collect()
}

#[test]
fn fixture_point() {
    let source = include_str!("../fixtures/point.wfl");
    let expected = include_str!("../fixtures/point.tokens");
    let tokens = scanner::scan(source).expect("scan should succeed");
    assert_eq!(printer::to_text(&tokens), expected);
}

#[test]
fn fixture_from_file_matches_in_memory_scan() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/point.wfl");
    let code = source::read_file(Path::new(path)).expect("fixture is readable");
    let from_file = Lexer::new(&code).tokenize().expect("scan should succeed");
    let in_memory = scanner::scan(include_str!("../fixtures/point.wfl")).expect("scan");
    assert_eq!(from_file, in_memory);
}

#[test]
fn fixture_has_no_comment_tokens() {
    let tokens = kinds(include_str!("../fixtures/point.wfl"));
    assert_eq!(tokens.first(), Some(&Token::Module));
}

#[rstest]
#[case("\"never closed", LexErrorKind::UnexpectedEndOfInput)]
#[case("a & b", LexErrorKind::UnsupportedCharacter)]
#[case("a | b", LexErrorKind::UnsupportedCharacter)]
#[case("let x = $", LexErrorKind::UnsupportedCharacter)]
#[case("1.2.3", LexErrorKind::MalformedNumericLiteral)]
#[case("0x", LexErrorKind::MalformedNumericLiteral)]
fn errors_abort_the_scan(#[case] source: &str, #[case] expected: LexErrorKind) {
    let err = scanner::scan(source).expect_err("scan should fail");
    assert_eq!(err.kind(), expected, "{source:?}: {err}");
}

#[test]
fn error_is_a_labelled_diagnostic() {
    use miette::Diagnostic;

    let err = scanner::scan("let a = 1 | 2").expect_err("lone '|'");
    let labels: Vec<_> = err.labels().expect("labels").collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 10);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        kinds("let a\r\nlet b\r\n"),
        vec![
            Token::Let,
            Token::Identifier("a".to_string()),
            Token::Let,
            Token::Identifier("b".to_string()),
        ]
    );
}

#[test]
fn json_output_round_trips_through_serde_json() {
    let tokens = scanner::scan("use io; let n = 0o17;").expect("scan should succeed");
    let value: serde_json::Value =
        serde_json::from_str(&printer::to_json(&tokens)).expect("valid JSON");
    assert_eq!(value[0]["token"], "Use");
    assert_eq!(value[6]["token"]["Integer"], 15);
}
