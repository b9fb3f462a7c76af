//! Data types of the language.
//!
//! There are exactly three primitive kinds. They appear in declarations,
//! loop headers, function return types and parameter lists.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int,
    String,
    Float,
}

impl DataType {
    pub fn from_token(kind: TokenKind) -> Option<DataType> {
        match kind {
            TokenKind::Int => Some(DataType::Int),
            TokenKind::String => Some(DataType::String),
            TokenKind::Float => Some(DataType::Float),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::String => "string",
            DataType::Float => "float",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
