use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Power,
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Right associative
    parser.led(TokenKind::StarStar, BindingPower::Power, parse_power_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Identifier, parse_identifier_stmt);
    parser.stmt(TokenKind::Int, parse_declaration_stmt);
    parser.stmt(TokenKind::String, parse_declaration_stmt);
    parser.stmt(TokenKind::Float, parse_declaration_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Rep, parse_repeat_stmt);
    parser.stmt(TokenKind::Func, parse_fn_decl_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
