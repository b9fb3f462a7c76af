use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("else", TokenKind::Else);
        map.insert("End", TokenKind::End);
        map.insert("float", TokenKind::Float);
        map.insert("func", TokenKind::Func);
        map.insert("if", TokenKind::If);
        map.insert("int", TokenKind::Int);
        map.insert("rep", TokenKind::Rep);
        map.insert("ret", TokenKind::Ret);
        map.insert("Start", TokenKind::Start);
        map.insert("string", TokenKind::String);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    Dash,       // -
    MinusMinus, // --
    NotEquals,  // !=
    OpenParen,
    CloseParen,
    Star,     // *
    StarStar, // **
    Comma,
    Slash,
    Semicolon,
    OpenCurly,
    CloseCurly,
    Plus,
    PlusPlus,
    Less,
    Assignment, // =
    Equals,     // ==
    Greater,

    // Reserved
    Else,
    End,
    Float,
    Func,
    If,
    Int,
    Rep,
    Ret,
    Start,
    String,
}

impl TokenKind {
    /// Human readable form used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Dash => "`-`",
            TokenKind::MinusMinus => "`--`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Star => "`*`",
            TokenKind::StarStar => "`**`",
            TokenKind::Comma => "`,`",
            TokenKind::Slash => "`/`",
            TokenKind::Semicolon => "`;`",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::Plus => "`+`",
            TokenKind::PlusPlus => "`++`",
            TokenKind::Less => "`<`",
            TokenKind::Assignment => "`=`",
            TokenKind::Equals => "`==`",
            TokenKind::Greater => "`>`",
            TokenKind::Else => "`else`",
            TokenKind::End => "`End`",
            TokenKind::Float => "`float`",
            TokenKind::Func => "`func`",
            TokenKind::If => "`if`",
            TokenKind::Int => "`int`",
            TokenKind::Rep => "`rep`",
            TokenKind::Ret => "`ret`",
            TokenKind::Start => "`Start`",
            TokenKind::String => "`string`",
        }
    }

    /// Source text of a fixed-lexeme token, `None` for identifiers, numbers and EOF.
    pub fn lexeme(&self) -> Option<&'static str> {
        match self {
            TokenKind::EOF | TokenKind::Number | TokenKind::Identifier => None,
            other => Some(other.describe().trim_matches('`')),
        }
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Short `Kind (value)` form for trace output.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Number]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
