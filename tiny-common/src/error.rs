//! Error handling for the TINY-extended interpreter
//!
//! Every phase has its own error enum that converts into [`CompilerError`].
//! All errors are fatal: the phase that raises one stops immediately and
//! nothing after it runs. The `Display` form is the diagnostic printed to
//! the user.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main error type that encompasses all phases of a run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("ERROR Line {}: {message}", .location.line)]
    SyntaxError {
        location: SourceLocation,
        message: String,
    },

    #[error("ERROR Line {}: {message}", .location.line)]
    SemanticError {
        location: SourceLocation,
        message: String,
    },

    #[error("ERROR {message}")]
    RuntimeError { message: String },

    #[error("ERROR {message}")]
    IoError { message: String },
}

impl CompilerError {
    /// Create a syntax error
    pub fn syntax_error(message: String, location: SourceLocation) -> Self {
        CompilerError::SyntaxError { location, message }
    }

    /// Create a semantic error
    pub fn semantic_error(message: String, location: SourceLocation) -> Self {
        CompilerError::SemanticError { location, message }
    }

    /// Create a runtime error
    pub fn runtime_error(message: String) -> Self {
        CompilerError::RuntimeError { message }
    }

    /// Source line of the error, if it has one
    pub fn line(&self) -> Option<u32> {
        match self {
            CompilerError::SyntaxError { location, .. }
            | CompilerError::SemanticError { location, .. } => Some(location.line),
            CompilerError::RuntimeError { .. } | CompilerError::IoError { .. } => None,
        }
    }

    /// The bare message without the `ERROR` prefix
    pub fn message(&self) -> &str {
        match self {
            CompilerError::SyntaxError { message, .. }
            | CompilerError::SemanticError { message, .. }
            | CompilerError::RuntimeError { message }
            | CompilerError::IoError { message } => message,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}
