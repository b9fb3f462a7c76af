//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns, longest match wins
//! - Recognition of keywords, identifiers, integers, and operators
//! - Line and column tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
