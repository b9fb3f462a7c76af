/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root, statement and expression enums
/// - expressions: Identifiers, literals, binary expressions and conditions
/// - statements: Definitions for the statement kinds
/// - types: The primitive data types
/// - render: Canonical source printer, the inverse of the parser
pub mod ast;
pub mod expressions;
pub mod render;
pub mod statements;
pub mod types;
