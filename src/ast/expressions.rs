use serde::{Deserialize, Serialize};

use crate::lexer::tokens::TokenKind;

use super::ast::Expr;

// LITERALS

/// Identifier
/// A variable, function or parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier {
            value: value.into(),
        }
    }
}

/// Number Expression
/// Represents a decimal integer literal in the AST. The digits are kept as
/// written, leading zeros included, and have no width limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberExpr {
    pub value: String,
}

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Sub),
            TokenKind::Star => Some(BinaryOperator::Mul),
            TokenKind::Slash => Some(BinaryOperator::Div),
            TokenKind::StarStar => Some(BinaryOperator::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Pow => "**",
        }
    }

    /// Relative binding strength, higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 1,
            BinaryOperator::Mul | BinaryOperator::Div => 2,
            BinaryOperator::Pow => 3,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, BinaryOperator::Pow)
    }
}

/// Binary Expression
/// `left operator right`, parentheses leave no trace in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Lt,
    Gt,
    Eq,
    Neq,
}

impl ComparisonOperator {
    pub fn from_token(kind: TokenKind) -> Option<ComparisonOperator> {
        match kind {
            TokenKind::Less => Some(ComparisonOperator::Lt),
            TokenKind::Greater => Some(ComparisonOperator::Gt),
            TokenKind::Equals => Some(ComparisonOperator::Eq),
            TokenKind::NotEquals => Some(ComparisonOperator::Neq),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Eq => "==",
            ComparisonOperator::Neq => "!=",
        }
    }
}

/// Condition
/// A single comparison, used by `if` and `rep`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub left: Expr,
    pub operator: ComparisonOperator,
    pub right: Expr,
}
