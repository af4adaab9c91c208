//! Expression parsing for TINY-extended
//!
//! One function per precedence level, loosest first:
//! comparison, additive, multiplicative, `&`, `^` (right-assoc), primary.

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::errors::ParseError;
use crate::parser::Parser;
use tiny_common::CompilerError;

impl Parser {
    /// Parse expression (top level): `mathexpr [cmp mathexpr]`
    pub fn parse_expression(&mut self) -> Result<Expression, CompilerError> {
        let left = self.parse_math_expression()?;

        let op = match self.peek_type() {
            TokenType::Equal => BinaryOp::Equal,
            TokenType::Less => BinaryOp::Less,
            TokenType::Greater => BinaryOp::Greater,
            TokenType::GreaterEqual => BinaryOp::GreaterEqual,
            TokenType::LessEqual => BinaryOp::LessEqual,
            _ => return Ok(left),
        };

        let line = self.current_line();
        self.advance();
        let right = self.parse_math_expression()?;

        Ok(Expression::binary(op, left, right, line))
    }

    /// Parse `term { ('+'|'-') term }`
    pub fn parse_math_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.peek_type() {
                TokenType::Plus => BinaryOp::Add,
                TokenType::Minus => BinaryOp::Sub,
                _ => break,
            };
            let line = self.current_line();
            self.advance();
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right, line);
        }

        Ok(left)
    }

    /// Parse `andexpr { ('*'|'/') andexpr }`
    fn parse_term(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_and_expression()?;

        loop {
            let op = match self.peek_type() {
                TokenType::Star => BinaryOp::Mul,
                TokenType::Slash => BinaryOp::Div,
                _ => break,
            };
            let line = self.current_line();
            self.advance();
            let right = self.parse_and_expression()?;
            left = Expression::binary(op, left, right, line);
        }

        Ok(left)
    }

    /// Parse `factor { '&' factor }`
    fn parse_and_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_factor()?;

        while self.check(&TokenType::Ampersand) {
            let line = self.current_line();
            self.advance();
            let right = self.parse_factor()?;
            left = Expression::binary(BinaryOp::DiffSquares, left, right, line);
        }

        Ok(left)
    }

    /// Parse `newexpr [ '^' factor ]`
    fn parse_factor(&mut self) -> Result<Expression, CompilerError> {
        let base = self.parse_primary()?;

        if self.check(&TokenType::Caret) {
            let line = self.current_line();
            self.advance();
            let exponent = self.parse_factor()?;
            return Ok(Expression::binary(BinaryOp::Power, base, exponent, line));
        }

        Ok(base)
    }

    /// Parse `'(' mathexpr ')' | NUM | 'true' | 'false' | ID | '-' newexpr`
    fn parse_primary(&mut self) -> Result<Expression, CompilerError> {
        let line = self.current_line();
        let expected = "expression".to_string();

        let token = match self.advance() {
            Some(token) => token,
            None => {
                return Err(ParseError::UnexpectedEndOfFile {
                    expected,
                    location: self.last_location,
                }
                .into())
            }
        };

        match token.token_type {
            TokenType::LeftParen => {
                let inner = self.parse_math_expression()?;
                self.expect(TokenType::RightParen, "parenthesized expression")?;
                Ok(inner)
            }
            TokenType::Number(lexeme) => {
                if lexeme.contains('.') {
                    let value = lexeme.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                        lexeme: lexeme.clone(),
                        location: token.span.start,
                    })?;
                    Ok(Expression::real_literal(value, line))
                } else {
                    let value = lexeme.parse::<i64>().map_err(|_| ParseError::IntegerOutOfRange {
                        lexeme: lexeme.clone(),
                        location: token.span.start,
                    })?;
                    Ok(Expression::int_literal(value, line))
                }
            }
            TokenType::True => Ok(Expression::bool_literal(true, line)),
            TokenType::False => Ok(Expression::bool_literal(false, line)),
            TokenType::Identifier(name) => Ok(Expression::identifier(name, line)),
            TokenType::Minus => {
                let operand = self.parse_primary()?;
                Ok(Expression::binary(BinaryOp::Sub, Expression::int_literal(0, line), operand, line))
            }
            TokenType::EndOfFile => Err(ParseError::UnexpectedEndOfFile {
                expected,
                location: token.span.start,
            }
            .into()),
            _ => Err(ParseError::UnexpectedToken { expected, found: token }.into()),
        }
    }
}
