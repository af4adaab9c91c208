//! Statement AST nodes for TINY-extended
//!
//! Statement sequences are plain vectors; nested blocks (`then`, `else`,
//! `repeat` bodies) own their own vectors.

use super::expressions::Expression;
use tiny_common::DataType;
use serde::{Deserialize, Serialize};

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// `int x`, `real y := 1.5`, ...
    Declaration {
        name: String,
        var_type: DataType,
        initializer: Option<Expression>,
    },

    /// `x := expr`
    Assign {
        name: String,
        value: Expression,
        var_type: DataType, // Filled during semantic analysis
    },

    /// `if cond then ... [else ...] end`
    If {
        condition: Expression,
        then_branch: Vec<Statement>,
        else_branch: Option<Vec<Statement>>,
    },

    /// `repeat ... until cond`
    Repeat {
        body: Vec<Statement>,
        condition: Expression,
    },

    /// `read x`
    Read {
        name: String,
        var_type: DataType, // Filled during semantic analysis
    },

    /// `write expr`
    Write(Expression),
}

/// A whole program: the top-level statement sequence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}
