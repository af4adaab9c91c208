//! Semantic analysis error definitions
//!
//! This module defines all error types that can occur during semantic analysis.

use tiny_common::{CompilerError, DataType, SourceLocation, SymbolError};
use thiserror::Error;

/// Semantic analysis errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SemanticError {
    #[error("Undefined variable '{name}'")]
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },

    #[error("Declaration type mismatch: cannot assign {found} to {declared} variable '{name}'")]
    DeclarationMismatch {
        name: String,
        declared: DataType,
        found: DataType,
        location: SourceLocation,
    },

    #[error("Assignment type mismatch: cannot assign {found} to {declared} variable '{name}'")]
    AssignmentMismatch {
        name: String,
        declared: DataType,
        found: DataType,
        location: SourceLocation,
    },

    #[error("Cannot compare BOOLEAN values with comparison operators")]
    BooleanComparison { location: SourceLocation },

    #[error("Invalid operand type in comparison")]
    InvalidComparisonOperand { location: SourceLocation },

    #[error("Arithmetic operator applied to BOOLEAN type")]
    BooleanArithmetic { location: SourceLocation },

    #[error("Invalid operand types for arithmetic: {left} and {right}")]
    InvalidArithmeticOperands {
        left: DataType,
        right: DataType,
        location: SourceLocation,
    },

    #[error("IF condition must evaluate to BOOLEAN, not {found}")]
    IfCondition {
        found: DataType,
        location: SourceLocation,
    },

    #[error("REPEAT until condition must evaluate to BOOLEAN, not {found}")]
    RepeatCondition {
        found: DataType,
        location: SourceLocation,
    },

    #[error("WRITE expression has no type")]
    UntypedWrite { location: SourceLocation },

    #[error("{source}")]
    Symbol {
        source: SymbolError,
        location: SourceLocation,
    },
}

impl SemanticError {
    pub fn location(&self) -> SourceLocation {
        match self {
            SemanticError::UndefinedVariable { location, .. }
            | SemanticError::DeclarationMismatch { location, .. }
            | SemanticError::AssignmentMismatch { location, .. }
            | SemanticError::BooleanComparison { location }
            | SemanticError::InvalidComparisonOperand { location }
            | SemanticError::BooleanArithmetic { location }
            | SemanticError::InvalidArithmeticOperands { location, .. }
            | SemanticError::IfCondition { location, .. }
            | SemanticError::RepeatCondition { location, .. }
            | SemanticError::UntypedWrite { location }
            | SemanticError::Symbol { location, .. } => *location,
        }
    }
}

impl From<SemanticError> for CompilerError {
    fn from(err: SemanticError) -> Self {
        let location = err.location();
        CompilerError::semantic_error(err.to_string(), location)
    }
}
