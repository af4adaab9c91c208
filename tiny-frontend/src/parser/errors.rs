//! Parse error types for the TINY-extended parser
//!
//! This module defines all error types that can occur during parsing.

use crate::lexer::Token;
use tiny_common::{CompilerError, SourceLocation};
use thiserror::Error;

/// Parse error types specific to the parser
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found '{}'", .found.token_type)]
    UnexpectedToken {
        expected: String,
        found: Token,
    },

    #[error("Unexpected end of file, expected {expected}")]
    UnexpectedEndOfFile {
        expected: String,
        location: SourceLocation,
    },

    #[error("Integer literal '{lexeme}' is out of range")]
    IntegerOutOfRange {
        lexeme: String,
        location: SourceLocation,
    },

    #[error("Invalid number '{lexeme}'")]
    InvalidNumber {
        lexeme: String,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { found, .. } => found.span.start,
            ParseError::UnexpectedEndOfFile { location, .. }
            | ParseError::IntegerOutOfRange { location, .. }
            | ParseError::InvalidNumber { location, .. } => *location,
        }
    }
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        let location = err.location();
        CompilerError::syntax_error(err.to_string(), location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenType;
    use tiny_common::SourceSpan;

    #[test]
    fn test_unexpected_token_reports_line() {
        let found = Token::new(
            TokenType::Semicolon,
            SourceSpan::from_location(SourceLocation::new(4, 7)),
        );
        let err: CompilerError = ParseError::UnexpectedToken {
            expected: "'then' in if statement".to_string(),
            found,
        }
        .into();

        assert_eq!(err.line(), Some(4));
        assert_eq!(err.to_string(), "ERROR Line 4: Expected 'then' in if statement, found ';'");
    }
}
