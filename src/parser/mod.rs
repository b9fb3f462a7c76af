//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for arithmetic
//! with proper operator precedence and handles:
//!
//! - Statement parsing (assignments, declarations, if chains, loops, functions)
//! - Expression parsing (`+ - * / **`, parentheses, conditions)
//! - Data type keywords
//! - Error reporting with the set of expected tokens
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
