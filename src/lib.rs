#![allow(clippy::module_inception)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn null() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::null()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes and parses `source` into a [`Program`].
///
/// The lexer is pulled by the parser on demand, so the first failure in
/// source order is the one reported, whether lexical or syntactic.
pub fn parse(source: &str) -> Result<Program, Error> {
    let (_, program) = parser::parser::parse_source(source);
    program
}

/// Returns the line number, the text of that line and the column offset
/// (0-based, in characters) for a position.
pub fn get_line_at_position(source: &str, position: &Position) -> (usize, String, usize) {
    let line_number = position.line as usize;
    let line = source
        .split_inclusive('\n')
        .nth(line_number.saturating_sub(1))
        .unwrap_or("");

    (
        line_number,
        line.to_string(),
        (position.column as usize).saturating_sub(1),
    )
}

/// Renders an error as a caret diagnostic:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `+`, expected one of `(`, identifier, number)
/// -> main.sl
///   |
/// 2 | a = +
///   | ----^
/// ```
pub fn render_error(error: &Error, source: &str, file_name: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file_name));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
