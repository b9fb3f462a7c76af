//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API from source text through lexing,
//! parsing, rendering and JSON serialization.

use startlang::{
    ast::ast::{Program, Stmt},
    errors::errors::ErrorKind,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse,
    parser::parser,
    render_error,
};

const FULL_PROGRAM: &str = "Start
    int total = 0
    float scale = 2 ** 3 ** 2
    string label = 1

    func int square(int n) {
        result = n * n
        ret result
    }

    rep (int i = 0; i < 10; ++i) {
        total = total + i * (scale - 1) / 2
        if (total > 100) {
            total = total - 100
        } else if (total == 50) {
            square(int total)
        }
    }

    rep (int j = 10; j != 0; j = j - 1) {
        if (j < 5) label = j
    }
End
";

#[test]
fn test_parse_full_program() {
    let program = parse(FULL_PROGRAM).unwrap();

    let names: Vec<&str> = program.body.iter().map(Stmt::get_stmt_name).collect();
    assert_eq!(
        names,
        vec![
            "Declaration",
            "Declaration",
            "Declaration",
            "FnDecl",
            "Repeat",
            "Repeat",
        ]
    );
}

#[test]
fn test_eager_and_lazy_lexing_agree() {
    let tokens = tokenize(FULL_PROGRAM).unwrap();
    let (_, from_tokens) = parser::parse(tokens);

    assert_eq!(from_tokens.unwrap(), parse(FULL_PROGRAM).unwrap());
}

#[test]
fn test_render_round_trip() {
    let program = parse(FULL_PROGRAM).unwrap();
    let rendered = program.to_string();

    assert_eq!(parse(&rendered).unwrap(), program);
    // Rendering is a fixed point after one pass
    assert_eq!(parse(&rendered).unwrap().to_string(), rendered);
}

#[test]
fn test_json_round_trip() {
    let program = parse(FULL_PROGRAM).unwrap();

    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn test_reductions_cover_program() {
    let (parser, result) = parser::parse_source(FULL_PROGRAM);
    result.unwrap();

    let reductions = parser.reductions();
    assert_eq!(reductions.last().map(|rule| rule.id()), Some(0));
    assert!(reductions.iter().any(|rule| rule.id() == 17)); // `**`
    assert!(reductions.iter().any(|rule| rule.id() == 24)); // if/else
    assert!(reductions.iter().any(|rule| rule.id() == 38)); // func decl
    assert!(reductions.iter().any(|rule| rule.id() == 43)); // func call
}

#[test]
fn test_first_error_in_source_order() {
    // The lexical error comes after the syntax error, so the syntax error wins
    let error = parse("Start x = + 1 y = # End").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Parse);

    let error = parse("Start x = # + End").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_unterminated_block() {
    let error = parse("Start rep (int i = 0; i < 3; ++i) { x = i End").unwrap_err();

    assert!(error.get_expected().contains(&TokenKind::CloseCurly));
    assert_eq!(error.get_position().line, 1);
}

#[test]
fn test_render_error_output() {
    let source = "Start\n  x = 1 +\nEnd\n";
    let error = parse(source).unwrap_err();
    let rendered = render_error(&error, source, "main.sl");

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Error: UnexpectedToken (Unexpected token: `End`, expected one of number, identifier, `(`)");
    assert_eq!(lines[1], "-> main.sl");
    assert_eq!(lines[3], "3 | End");
    assert_eq!(lines[4], "  | ^");
}
