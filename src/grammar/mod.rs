//! The grammar of the language as data.
//!
//! Symbols, the 44 productions and their FIRST sets. The table is built
//! once and shared read-only; the parser reads it for expected-token sets
//! and to name the productions it recognizes.

pub mod grammar;

#[cfg(test)]
mod tests;
