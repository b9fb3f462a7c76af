//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, operators with longest match,
//! positions, and error cases.

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("Start End int string float if else rep func ret"),
        vec![
            TokenKind::Start,
            TokenKind::End,
            TokenKind::Int,
            TokenKind::String,
            TokenKind::Float,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Rep,
            TokenKind::Func,
            TokenKind::Ret,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(
        kinds("start END If"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore Starts iffy").unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "baz_123", "_underscore", "Starts", "iffy", "EOF"]);
    assert!(tokens[..5]
        .iter()
        .all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("0 42 007").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "0");
    assert_eq!(tokens[1].value, "42");
    assert_eq!(tokens[2].value, "007");
}

#[test]
fn test_number_then_identifier() {
    let tokens = tokenize("12abc").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / ** ++ -- = == != < > ( ) { } ; ,"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::StarStar,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_longest_match() {
    assert_eq!(
        kinds("a***b"),
        vec![
            TokenKind::Identifier,
            TokenKind::StarStar,
            TokenKind::Star,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("a===b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("+++"),
        vec![TokenKind::PlusPlus, TokenKind::Plus, TokenKind::EOF]
    );
}

#[test]
fn test_no_whitespace_needed() {
    assert_eq!(
        kinds("Start x=1 End"),
        kinds("Start\n\tx = 1\r\nEnd")
    );
}

#[test]
fn test_positions() {
    let tokens = tokenize("Start\n  x = 10\nEnd").unwrap();

    let x = &tokens[1];
    assert_eq!((x.span.start.line, x.span.start.column), (2, 3));
    assert_eq!(x.span.start.offset, 8);

    let number = &tokens[3];
    assert_eq!((number.span.start.line, number.span.start.column), (2, 7));
    assert_eq!((number.span.end.line, number.span.end.column), (2, 9));

    let end = &tokens[4];
    assert_eq!(end.kind, TokenKind::End);
    assert_eq!((end.span.start.line, end.span.start.column), (3, 1));

    let eof = &tokens[5];
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start, eof.span.end);
    assert_eq!(eof.span.start.offset, 18);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n "), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("a = 1\nb = @").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_lone_bang_is_unrecognised() {
    let error = tokenize("a ! b").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedCharacter { character: '!' }
    );
}

#[test]
fn test_lexer_is_lazy_and_fused() {
    let mut lexer = Lexer::new("x # y");

    let first = lexer.next().unwrap().unwrap();
    assert_eq!(first.kind, TokenKind::Identifier);

    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_single_eof() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::EOF);
    assert!(lexer.next().is_none());
}

#[test]
fn test_current_position_tracks_consumed_input() {
    let mut lexer = Lexer::new("x\n  yz");
    assert_eq!(lexer.current_position().offset, 0);

    lexer.next().unwrap().unwrap();
    let position = lexer.current_position();
    assert_eq!((position.line, position.column, position.offset), (1, 2, 1));

    let token = lexer.next().unwrap().unwrap();
    assert_eq!(token.value, "yz");
    let position = lexer.current_position();
    assert_eq!((position.line, position.column, position.offset), (2, 5, 6));
}
