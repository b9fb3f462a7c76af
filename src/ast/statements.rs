use std::slice::Iter;

use serde::{Deserialize, Serialize};

use super::{
    ast::{Expr, Stmt},
    expressions::{Condition, Identifier},
    types::DataType,
};

/// One or more statements. The grammar has no empty bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// `target = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub target: Identifier,
    pub value: Expr,
}

/// `int x = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationStmt {
    pub data_type: DataType,
    pub assign: AssignStmt,
}

/// `if (condition) then_body [else if ...]`
///
/// `else` is always followed by another `if`, so the else branch is a
/// right-leaning chain of `IfStmt`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Condition,
    pub then_body: BlockStmt,
    pub else_body: Option<Box<IfStmt>>,
}

/// Loop-advance clause of a `rep` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Increment(Identifier),
    Decrement(Identifier),
    Assign(AssignStmt),
}

/// `rep (data_type init; condition; step) { body }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatStmt {
    pub data_type: DataType,
    pub init: AssignStmt,
    pub condition: Condition,
    pub step: Step,
    pub body: BlockStmt,
}

/// A `(data_type, name)` pair, in declarations and in calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub data_type: DataType,
    pub name: Identifier,
}

/// `func return_type name(parameters) { body ret return_id }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FnDeclStmt {
    pub return_type: DataType,
    pub name: Identifier,
    pub parameters: Vec<Parameter>,
    pub body: BlockStmt,
    pub return_id: Identifier,
}

/// `name(arguments)`
///
/// Arguments are typed pairs, the same shape as declaration parameters.
/// Whether they agree with the callee's declaration is left to later passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FnCallStmt {
    pub name: Identifier,
    pub arguments: Vec<Parameter>,
}
