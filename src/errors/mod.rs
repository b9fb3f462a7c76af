//! Diagnostics produced by the front end.
//!
//! This module defines the error values returned by the lexer and the
//! parser. It includes:
//!
//! - Error structures with source position information
//! - The lexical / parse classification
//! - Expected-token sets and short suggestions for display

pub mod errors;
