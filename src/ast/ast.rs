use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{
    expressions::{BinaryExpr, BinaryOperator, Identifier, NumberExpr},
    render::render,
    statements::{
        AssignStmt, BlockStmt, DeclarationStmt, FnCallStmt, FnDeclStmt, IfStmt, RepeatStmt,
    },
};

/// Root of the tree: the body between `Start` and `End`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub body: BlockStmt,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}

/// Statement
///
/// One concept of the language. The set is closed: every statement form
/// the grammar knows is a variant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    Assign(AssignStmt),
    Declaration(DeclarationStmt),
    If(IfStmt),
    Repeat(RepeatStmt),
    FnDecl(FnDeclStmt),
    FnCall(FnCallStmt),
}

impl Stmt {
    pub fn get_stmt_name(&self) -> &'static str {
        match self {
            Stmt::Assign(_) => "Assign",
            Stmt::Declaration(_) => "Declaration",
            Stmt::If(_) => "If",
            Stmt::Repeat(_) => "Repeat",
            Stmt::FnDecl(_) => "FnDecl",
            Stmt::FnCall(_) => "FnCall",
        }
    }
}

/// Expression
///
/// Arithmetic tree with identifier and integer leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Binary(BinaryExpr),
    Symbol(Identifier),
    Number(NumberExpr),
}

impl Expr {
    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn symbol(value: impl Into<String>) -> Expr {
        Expr::Symbol(Identifier::new(value))
    }

    pub fn number(value: impl Display) -> Expr {
        Expr::Number(NumberExpr {
            value: value.to_string(),
        })
    }
}
