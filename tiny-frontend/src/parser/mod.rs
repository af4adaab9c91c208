//! TINY-extended Recursive Descent Parser
//!
//! Parses scanner tokens into an Abstract Syntax Tree (AST) with one token
//! of lookahead. There is no error recovery: the first mismatch aborts.

pub mod errors;
pub mod statements;
pub mod expressions;

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use tiny_common::{CompilerError, SourceLocation};
use std::collections::VecDeque;
use log::debug;

pub use errors::ParseError;

/// TINY-extended Parser
pub struct Parser {
    pub(crate) tokens: VecDeque<Token>,
    pub(crate) last_location: SourceLocation,
}

impl Parser {
    /// Create a new parser
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
            last_location: SourceLocation::new(1, 1),
        }
    }

    /// Peek at current token without consuming
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Type of the lookahead token; a drained queue reads as EOF
    pub(crate) fn peek_type(&self) -> &TokenType {
        self.peek().map_or(&TokenType::EndOfFile, |t| &t.token_type)
    }

    /// Get current token and advance
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front();
        if let Some(token) = &token {
            self.last_location = token.span.start;
        }
        token
    }

    /// Check if current token matches expected type
    pub(crate) fn check(&self, token_type: &TokenType) -> bool {
        std::mem::discriminant(self.peek_type()) == std::mem::discriminant(token_type)
    }

    /// Consume token if it matches expected type
    pub(crate) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect and consume a specific token type
    pub(crate) fn expect(&mut self, token_type: TokenType, context: &str) -> Result<Token, ParseError> {
        let expected = format!("'{}' in {}", token_type, context);
        match self.advance() {
            Some(token) if token.token_type == TokenType::EndOfFile && token_type != TokenType::EndOfFile => {
                Err(ParseError::UnexpectedEndOfFile {
                    expected,
                    location: token.span.start,
                })
            }
            Some(token) => {
                if std::mem::discriminant(&token.token_type) == std::mem::discriminant(&token_type) {
                    Ok(token)
                } else {
                    Err(ParseError::UnexpectedToken { expected, found: token })
                }
            }
            None => Err(ParseError::UnexpectedEndOfFile {
                expected,
                location: self.last_location,
            }),
        }
    }

    /// Expect an identifier and return its name
    pub(crate) fn expect_identifier(&mut self, context: &str) -> Result<String, ParseError> {
        let expected = format!("identifier in {}", context);
        match self.advance() {
            Some(Token { token_type: TokenType::Identifier(name), .. }) => Ok(name),
            Some(token) if token.token_type == TokenType::EndOfFile => Err(ParseError::UnexpectedEndOfFile {
                expected,
                location: token.span.start,
            }),
            Some(found) => Err(ParseError::UnexpectedToken { expected, found }),
            None => Err(ParseError::UnexpectedEndOfFile {
                expected,
                location: self.last_location,
            }),
        }
    }

    /// Get current location for error reporting
    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().map_or(self.last_location, |t| t.span.start)
    }

    /// Line of the lookahead token; nodes take their line from here
    pub(crate) fn current_line(&self) -> u32 {
        self.current_location().line
    }

    /// Parse a complete program: one statement sequence followed by EOF
    pub fn parse_program(&mut self) -> Result<Program, CompilerError> {
        let statements = self.parse_statement_sequence()?;

        if !self.check(&TokenType::EndOfFile) {
            let expected = "end of program".to_string();
            return Err(match self.advance() {
                Some(found) => ParseError::UnexpectedToken { expected, found },
                None => ParseError::UnexpectedEndOfFile {
                    expected,
                    location: self.last_location,
                },
            }
            .into());
        }

        debug!("Parsed program with {} top-level statements", statements.len());
        Ok(Program { statements })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use pretty_assertions::assert_eq;
    use tiny_common::DataType;

    fn parse(input: &str) -> Result<Program, CompilerError> {
        let tokens = Lexer::new(input).tokenize();
        Parser::new(tokens).parse_program()
    }

    #[test]
    fn test_empty_program() {
        let program = parse("").unwrap();
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_statement_sequence() {
        let program = parse("int x; x := 5; write x").unwrap();
        assert_eq!(program.statements.len(), 3);
        assert!(matches!(
            &program.statements[0].kind,
            StatementKind::Declaration { name, var_type: DataType::Integer, initializer: None } if name == "x"
        ));
        assert!(matches!(program.statements[2].kind, StatementKind::Write(_)));
    }

    #[test]
    fn test_trailing_semicolon_tolerated() {
        let program = parse("int x; x := 1;").unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_leftover_tokens_rejected() {
        let err = parse("int x end").unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert!(err.message().contains("end of program"), "{}", err);
    }

    #[test]
    fn test_missing_then_reports_line() {
        let err = parse("int x;\nif x < 1 write x end").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(err.message().contains("'then'"), "{}", err);
    }

    #[test]
    fn test_unexpected_end_of_file() {
        let err = parse("repeat write 1").unwrap_err();
        assert!(matches!(err, CompilerError::SyntaxError { .. }));
        assert!(err.message().starts_with("Unexpected end of file"), "{}", err);
    }

    #[test]
    fn test_error_character_is_syntax_error() {
        let err = parse("int x; x := 1 # 2").unwrap_err();
        assert!(matches!(err, CompilerError::SyntaxError { .. }));
    }

    #[test]
    fn test_lines_come_from_lookahead() {
        let program = parse("int a;\n\nread a;\nwrite a").unwrap();
        let lines: Vec<u32> = program.statements.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }
}
