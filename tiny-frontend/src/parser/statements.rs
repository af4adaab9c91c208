//! Statement parsing for TINY-extended
//!
//! This module handles statement sequences and every statement form.

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;
use tiny_common::{CompilerError, DataType};
use log::trace;

impl Parser {
    /// A sequence ends at EOF or at the keyword that closes its block
    fn at_sequence_end(&self) -> bool {
        matches!(
            self.peek_type(),
            TokenType::EndOfFile | TokenType::End | TokenType::Else | TokenType::Until
        )
    }

    /// Parse `stmt { ';' stmt }`, tolerating a `;` before the closing keyword
    pub fn parse_statement_sequence(&mut self) -> Result<Vec<Statement>, CompilerError> {
        let mut statements = Vec::new();

        if self.at_sequence_end() {
            return Ok(statements);
        }

        statements.push(self.parse_statement()?);

        while self.match_token(&TokenType::Semicolon) {
            if self.at_sequence_end() {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse statement
    pub fn parse_statement(&mut self) -> Result<Statement, CompilerError> {
        let line = self.current_line();
        trace!("Parsing statement at line {} ({})", line, self.peek_type().kind_name());

        let kind = match self.peek_type() {
            TokenType::Int => self.parse_declaration(DataType::Integer)?,
            TokenType::Real => self.parse_declaration(DataType::Real)?,
            TokenType::Bool => self.parse_declaration(DataType::Boolean)?,
            TokenType::If => self.parse_if_statement()?,
            TokenType::Repeat => self.parse_repeat_statement()?,
            TokenType::Identifier(_) => self.parse_assign_statement()?,
            TokenType::Read => self.parse_read_statement()?,
            TokenType::Write => self.parse_write_statement()?,
            _ => {
                let expected = "statement".to_string();
                let err = match self.advance() {
                    Some(found) if found.token_type != TokenType::EndOfFile => {
                        crate::parser::ParseError::UnexpectedToken { expected, found }
                    }
                    _ => crate::parser::ParseError::UnexpectedEndOfFile {
                        expected,
                        location: self.last_location,
                    },
                };
                return Err(err.into());
            }
        };

        Ok(Statement { kind, line })
    }

    /// Parse `('int'|'real'|'bool') ID [':=' expr]`
    fn parse_declaration(&mut self, var_type: DataType) -> Result<StatementKind, CompilerError> {
        self.advance(); // type keyword
        let name = self.expect_identifier("declaration")?;

        let initializer = if self.match_token(&TokenType::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(StatementKind::Declaration { name, var_type, initializer })
    }

    /// Parse `'if' expr 'then' stmtseq ['else' stmtseq] 'end'`
    fn parse_if_statement(&mut self) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::If, "if statement")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::Then, "if statement")?;
        let then_branch = self.parse_statement_sequence()?;

        let else_branch = if self.match_token(&TokenType::Else) {
            Some(self.parse_statement_sequence()?)
        } else {
            None
        };

        self.expect(TokenType::End, "if statement")?;

        Ok(StatementKind::If { condition, then_branch, else_branch })
    }

    /// Parse `'repeat' stmtseq 'until' expr`
    fn parse_repeat_statement(&mut self) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::Repeat, "repeat statement")?;
        let body = self.parse_statement_sequence()?;
        self.expect(TokenType::Until, "repeat statement")?;
        let condition = self.parse_expression()?;

        Ok(StatementKind::Repeat { body, condition })
    }

    /// Parse `ID ':=' expr`
    fn parse_assign_statement(&mut self) -> Result<StatementKind, CompilerError> {
        let name = self.expect_identifier("assignment")?;
        self.expect(TokenType::Assign, "assignment")?;
        let value = self.parse_expression()?;

        Ok(StatementKind::Assign {
            name,
            value,
            var_type: DataType::Void,
        })
    }

    /// Parse `'read' ID`
    fn parse_read_statement(&mut self) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::Read, "read statement")?;
        let name = self.expect_identifier("read statement")?;

        Ok(StatementKind::Read {
            name,
            var_type: DataType::Void,
        })
    }

    /// Parse `'write' expr`
    fn parse_write_statement(&mut self) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::Write, "write statement")?;
        Ok(StatementKind::Write(self.parse_expression()?))
    }
}
