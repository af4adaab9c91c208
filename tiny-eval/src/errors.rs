//! Runtime error definitions

use thiserror::Error;
use tiny_common::{CompilerError, DataType};

/// Errors raised while executing a program
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Undefined variable '{0}'")]
    UndefinedVariable(String),

    #[error("Invalid operands for '{op}': {left} and {right}")]
    InvalidOperands {
        op: String,
        left: DataType,
        right: DataType,
    },

    #[error("Condition evaluated to {0}, expected Boolean")]
    NonBooleanCondition(DataType),

    #[error("No input left to read '{0}'")]
    InputExhausted(String),

    #[error("Invalid {expected} input '{word}' for '{name}'")]
    InvalidInput {
        name: String,
        expected: DataType,
        word: String,
    },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self {
        RuntimeError::Io(err.to_string())
    }
}

impl From<RuntimeError> for CompilerError {
    fn from(err: RuntimeError) -> Self {
        CompilerError::runtime_error(err.to_string())
    }
}
