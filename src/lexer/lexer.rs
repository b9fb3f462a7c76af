use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns the matched text into a token, or `None` for skipped input.
pub type RegexHandler = fn(&Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str) -> Regex {
    Regex::new(&format!("^(?:{})", source)).unwrap()
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: pattern("[a-zA-Z_][a-zA-Z0-9_]*"), handler: symbol_handler },
        RegexPattern { regex: pattern("[0-9]+"), handler: number_handler },
        RegexPattern { regex: pattern("\\s+"), handler: skip_handler },
        RegexPattern { regex: pattern("\\{"), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: pattern("\\}"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: pattern("\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: pattern("\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: pattern("=="), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: pattern("!="), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: pattern("="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: pattern("<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: pattern(">"), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: pattern(";"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: pattern(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: pattern("\\+\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus) },
        RegexPattern { regex: pattern("--"), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus) },
        RegexPattern { regex: pattern("\\*\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::StarStar) },
        RegexPattern { regex: pattern("\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: pattern("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: pattern("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: pattern("\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
    ];
}

/// Lazy tokenizer over a source string.
///
/// Yields tokens on demand, ending with a single `EOF` token. After the
/// `EOF` token or the first error the lexer is exhausted.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            done: false,
        }
    }

    pub fn current_position(&self) -> Position {
        Position {
            offset: self.pos as u32,
            line: self.line,
            column: self.column,
        }
    }

    /// Span covering `matched` starting at the current position.
    pub fn span_of(&self, matched: &str) -> Span {
        Span {
            start: self.current_position(),
            end: self.position_after(matched),
        }
    }

    fn position_after(&self, text: &str) -> Position {
        let mut position = self.current_position();
        for ch in text.chars() {
            if ch == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
        }
        position.offset += text.len() as u32;
        position
    }

    pub fn advance_str(&mut self, matched: &str) {
        let end = self.position_after(matched);
        self.pos += matched.len();
        self.line = end.line;
        self.column = end.column;
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Longest match among all patterns at the current position. Ties keep
    /// the earlier pattern.
    fn longest_match(&self) -> Option<(&'static RegexPattern, &'a str)> {
        let remainder = self.remainder();
        let mut best: Option<(&'static RegexPattern, &'a str)> = None;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                let longer = best.map_or(true, |(_, current)| found.len() > current.len());
                if !found.is_empty() && longer {
                    best = Some((pattern, found.as_str()));
                }
            }
        }

        best
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if self.at_eof() {
                self.done = true;
                let position = self.current_position();
                return Some(Ok(MK_TOKEN!(
                    TokenKind::EOF,
                    String::from("EOF"),
                    Span {
                        start: position,
                        end: position
                    }
                )));
            }

            let Some((pattern, matched)) = self.longest_match() else {
                self.done = true;
                return Some(Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter {
                        character: self.at().unwrap_or_default(),
                    },
                    self.current_position(),
                )));
            };

            let token = (pattern.handler)(self, matched);
            self.advance_str(matched);

            if let Some(token) = token {
                trace!(token = %token.debug(), "lexed");
                return Some(Ok(token));
            }
        }

        None
    }
}

impl FusedIterator for Lexer<'_> {}

fn number_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(
        TokenKind::Number,
        String::from(matched),
        lexer.span_of(matched)
    ))
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, String::from(matched), lexer.span_of(matched)))
}

/// Tokenizes the whole source eagerly, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source).collect::<Result<Vec<Token>, Error>>()?;
    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
