//! Data type parsing.
//!
//! The three type keywords `int`, `string` and `float` are dispatched
//! through their own lookup table, the same way statements and
//! expression leaves are.

use std::collections::HashMap;

use crate::{
    ast::types::DataType,
    errors::errors::Error,
    grammar::grammar::{Nonterminal, Rule, GRAMMAR},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for data type handler functions.
pub type TypeHandler = fn(&mut Parser<'_>) -> Result<DataType, Error>;

/// Type alias for the data type lookup table.
pub type TypeLookup = HashMap<TokenKind, TypeHandler>;

/// Initializes the data type lookup table.
///
/// # Arguments
///
/// * `parser` - Mutable reference to the parser to initialize
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Int, parse_data_type_keyword);
    parser.type_nud(TokenKind::String, parse_data_type_keyword);
    parser.type_nud(TokenKind::Float, parse_data_type_keyword);
}

/// Parses a `<data>` at the current token.
///
/// # Errors
///
/// Returns an error naming the type keywords when the current token is
/// not one of them.
pub fn parse_data_type(parser: &mut Parser) -> Result<DataType, Error> {
    let token_kind = parser.current_token_kind()?;
    let Some(handler) = parser.get_type_lookup().get(&token_kind).copied() else {
        let token = parser.current_token()?;
        return Err(Error::unexpected(token, GRAMMAR.first(Nonterminal::Data).to_vec()));
    };

    handler(parser)
}

pub fn parse_data_type_keyword(parser: &mut Parser) -> Result<DataType, Error> {
    let token = parser.advance()?;
    let Some(data_type) = DataType::from_token(token.kind) else {
        return Err(Error::unexpected(&token, GRAMMAR.first(Nonterminal::Data).to_vec()));
    };

    parser.reduce(match data_type {
        DataType::Int => Rule::DataInt,
        DataType::String => Rule::DataString,
        DataType::Float => Rule::DataFloat,
    });

    Ok(data_type)
}
