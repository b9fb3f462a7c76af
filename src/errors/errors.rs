use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The two failure classes a parse attempt can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Lexical,
    Parse,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Error for `token` showing up where one of `expected` was required.
    pub fn unexpected(token: &Token, expected: Vec<TokenKind>) -> Self {
        let internal_error = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEndOfInput { expected }
        } else {
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                expected,
            }
        };

        Error::new(internal_error, token.span.start)
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Parse,
        }
    }

    /// Token kinds that would have been accepted at the failing position.
    pub fn get_expected(&self) -> &[TokenKind] {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. }
            | ErrorImpl::UnexpectedEndOfInput { expected } => expected,
            ErrorImpl::UnrecognisedCharacter { .. } | ErrorImpl::NestingTooDeep { .. } => &[],
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language",
                character.escape_debug()
            )),
            ErrorImpl::UnexpectedToken { token, expected } => {
                if expected.is_empty() {
                    ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, expected {}",
                        token,
                        describe_expected(expected)
                    ))
                }
            }
            ErrorImpl::UnexpectedEndOfInput { expected } if expected.contains(&TokenKind::End) => {
                ErrorTip::Suggestion(String::from("Programs must be closed with `End`"))
            }
            ErrorImpl::UnexpectedEndOfInput { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels, split the program into functions",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// `a`, `a or b`, `one of a, b, c`.
pub fn describe_expected(expected: &[TokenKind]) -> String {
    let described = expected.iter().map(TokenKind::describe).collect::<Vec<_>>();

    match described.as_slice() {
        [] => String::from("nothing"),
        [single] => String::from(*single),
        [first, second] => format!("{} or {}", first, second),
        many => format!("one of {}", many.join(", ")),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unexpected token `{token}`, expected {}", describe_expected(.expected))]
    UnexpectedToken {
        token: String,
        expected: Vec<TokenKind>,
    },
    #[error("unexpected end of input, expected {}", describe_expected(.expected))]
    UnexpectedEndOfInput { expected: Vec<TokenKind> },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
