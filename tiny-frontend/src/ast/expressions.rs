//! Expression AST nodes for TINY-extended
//!
//! This module defines expression nodes in the abstract syntax tree.

use super::ops::BinaryOp;
use tiny_common::DataType;
use serde::{Deserialize, Serialize};

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub line: u32,
    pub expr_type: DataType, // Literals are typed by the parser, the rest during semantic analysis
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// Integer literal
    IntLiteral(i64),

    /// Real literal
    RealLiteral(f64),

    /// `true` or `false`
    BoolLiteral(bool),

    /// Variable reference
    Identifier {
        name: String,
        var_type: DataType, // Filled during semantic analysis
    },

    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn int_literal(value: i64, line: u32) -> Self {
        Self {
            kind: ExpressionKind::IntLiteral(value),
            line,
            expr_type: DataType::Integer,
        }
    }

    pub fn real_literal(value: f64, line: u32) -> Self {
        Self {
            kind: ExpressionKind::RealLiteral(value),
            line,
            expr_type: DataType::Real,
        }
    }

    pub fn bool_literal(value: bool, line: u32) -> Self {
        Self {
            kind: ExpressionKind::BoolLiteral(value),
            line,
            expr_type: DataType::Boolean,
        }
    }

    pub fn identifier(name: String, line: u32) -> Self {
        Self {
            kind: ExpressionKind::Identifier {
                name,
                var_type: DataType::Void,
            },
            line,
            expr_type: DataType::Void,
        }
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression, line: u32) -> Self {
        Self {
            kind: ExpressionKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            line,
            expr_type: DataType::Void,
        }
    }
}
