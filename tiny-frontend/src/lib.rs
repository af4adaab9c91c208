//! TINY-extended Interpreter - Frontend
//!
//! This crate provides the frontend components for the TINY-extended interpreter:
//! - Lexer: tokenizes TINY-extended source code
//! - Parser: builds AST from tokens
//! - AST: abstract syntax tree definitions and the tree dump
//! - Semantic analysis: symbol table construction and type checking

pub mod lexer;
pub mod parser;
pub mod ast;
pub mod semantic;

pub use lexer::{Lexer, Token, TokenType};
pub use parser::{Parser, ParseError};
pub use ast::{
    BinaryOp, Expression, ExpressionKind, Program, Statement, StatementKind,
};
pub use semantic::{SemanticAnalyzer, SemanticError};

use tiny_common::{CompilerError, SymbolTable};

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Parse TINY-extended source code into an AST
    pub fn parse_source(source: &str) -> Result<Program, CompilerError> {
        let tokens = Self::tokenize_source(source);
        let mut parser = Parser::new(tokens);
        parser.parse_program()
    }

    /// Parse and analyze source code, returning the annotated AST and its symbol table
    pub fn analyze_source(source: &str) -> Result<(Program, SymbolTable), CompilerError> {
        let mut program = Self::parse_source(source)?;

        let mut symbol_table = SymbolTable::new();
        SemanticAnalyzer::analyze(&mut program, &mut symbol_table)?;

        Ok((program, symbol_table))
    }

    /// Tokenize source code, ending with an EOF token
    pub fn tokenize_source(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        lexer.tokenize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_common::DataType;

    #[test]
    fn test_frontend_tokenize() {
        let tokens = Frontend::tokenize_source("int x := 42;");

        // Should have: int, x, :=, 42, ;, EOF
        assert_eq!(tokens.len(), 6);
        assert!(matches!(tokens[0].token_type, TokenType::Int));
        assert!(matches!(tokens[1].token_type, TokenType::Identifier(_)));
        assert!(matches!(tokens[2].token_type, TokenType::Assign));
        assert!(matches!(tokens[5].token_type, TokenType::EndOfFile));
    }

    #[test]
    fn test_frontend_analyze() {
        let (program, table) = Frontend::analyze_source("int x; x := 5; x := x + 1; write x").unwrap();
        assert_eq!(program.statements.len(), 4);
        let x = table.find("x").unwrap();
        assert_eq!(x.slot, 0);
        assert_eq!(x.var_type, DataType::Integer);
    }

    #[test]
    fn test_frontend_stops_at_syntax_error() {
        let err = Frontend::analyze_source("int x; x = 1").unwrap_err();
        assert!(matches!(err, CompilerError::SyntaxError { .. }));
    }
}
