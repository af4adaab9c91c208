//! Operator definitions for TINY-extended
//!
//! This module defines the binary operators used in expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Comparison
    Equal, Less, Greater, GreaterEqual, LessEqual,

    // Arithmetic
    Add, Sub, Mul, Div, Power,

    /// `a & b` computes `a*a - b*b`
    DiffSquares,
}

impl BinaryOp {
    /// Comparison operators always produce a Boolean
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Equal | BinaryOp::Less | BinaryOp::Greater | BinaryOp::GreaterEqual | BinaryOp::LessEqual
        )
    }

    /// Name used by the tree dump
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Equal => "Equal",
            BinaryOp::Less => "LessThan",
            BinaryOp::Greater => "GreaterThan",
            BinaryOp::GreaterEqual => "GreaterEqual",
            BinaryOp::LessEqual => "LessEqual",
            BinaryOp::Add => "Plus",
            BinaryOp::Sub => "Minus",
            BinaryOp::Mul => "Times",
            BinaryOp::Div => "Divide",
            BinaryOp::Power => "Power",
            BinaryOp::DiffSquares => "And",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Equal => "=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Power => "^",
            BinaryOp::DiffSquares => "&",
        };
        write!(f, "{}", op_str)
    }
}
