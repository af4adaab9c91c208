//! Token definitions for the TINY-extended scanner
//!
//! This module defines token types and the Token struct.

use tiny_common::{SourceLocation, SourceSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// TINY-extended token types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenType {
    // Literals and names
    Number(String),
    Identifier(String),

    // Keywords
    If, Then, Else, End, Repeat, Until, Read, Write,
    Int, Real, Bool, True, False,

    // Operators
    Assign,         // :=
    Equal,          // =
    Less,           // <
    Greater,        // >
    GreaterEqual,   // >=
    LessEqual,      // <=
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /
    Caret,          // ^
    Ampersand,      // &

    // Delimiters
    Semicolon,      // ;
    LeftParen,      // (
    RightParen,     // )
    RightBrace,     // } outside a comment

    // Special
    Error(char),
    EndOfFile,
}

impl TokenType {
    /// Name of the token kind, used by the scanner dump
    pub fn kind_name(&self) -> &'static str {
        match self {
            TokenType::Number(_) => "Num",
            TokenType::Identifier(_) => "ID",
            TokenType::If => "If",
            TokenType::Then => "Then",
            TokenType::Else => "Else",
            TokenType::End => "End",
            TokenType::Repeat => "Repeat",
            TokenType::Until => "Until",
            TokenType::Read => "Read",
            TokenType::Write => "Write",
            TokenType::Int => "IntType",
            TokenType::Real => "RealType",
            TokenType::Bool => "BoolType",
            TokenType::True => "True",
            TokenType::False => "False",
            TokenType::Assign => "Assign",
            TokenType::Equal => "Equal",
            TokenType::Less => "LessThan",
            TokenType::Greater => "GreaterThan",
            TokenType::GreaterEqual => "GreaterEqual",
            TokenType::LessEqual => "LessEqual",
            TokenType::Plus => "Plus",
            TokenType::Minus => "Minus",
            TokenType::Star => "Times",
            TokenType::Slash => "Divide",
            TokenType::Caret => "Power",
            TokenType::Ampersand => "And",
            TokenType::Semicolon => "SemiColon",
            TokenType::LeftParen => "LeftParen",
            TokenType::RightParen => "RightParen",
            TokenType::RightBrace => "RightBrace",
            TokenType::Error(_) => "Error",
            TokenType::EndOfFile => "EndFile",
        }
    }

    /// Text of the token as it appears in source
    pub fn lexeme(&self) -> String {
        match self {
            TokenType::EndOfFile => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Number(n) => write!(f, "{n}"),
            TokenType::Identifier(s) => write!(f, "{s}"),

            TokenType::If => write!(f, "if"),
            TokenType::Then => write!(f, "then"),
            TokenType::Else => write!(f, "else"),
            TokenType::End => write!(f, "end"),
            TokenType::Repeat => write!(f, "repeat"),
            TokenType::Until => write!(f, "until"),
            TokenType::Read => write!(f, "read"),
            TokenType::Write => write!(f, "write"),
            TokenType::Int => write!(f, "int"),
            TokenType::Real => write!(f, "real"),
            TokenType::Bool => write!(f, "bool"),
            TokenType::True => write!(f, "true"),
            TokenType::False => write!(f, "false"),

            TokenType::Assign => write!(f, ":="),
            TokenType::Equal => write!(f, "="),
            TokenType::Less => write!(f, "<"),
            TokenType::Greater => write!(f, ">"),
            TokenType::GreaterEqual => write!(f, ">="),
            TokenType::LessEqual => write!(f, "<="),
            TokenType::Plus => write!(f, "+"),
            TokenType::Minus => write!(f, "-"),
            TokenType::Star => write!(f, "*"),
            TokenType::Slash => write!(f, "/"),
            TokenType::Caret => write!(f, "^"),
            TokenType::Ampersand => write!(f, "&"),

            TokenType::Semicolon => write!(f, ";"),
            TokenType::LeftParen => write!(f, "("),
            TokenType::RightParen => write!(f, ")"),
            TokenType::RightBrace => write!(f, "}}"),

            TokenType::Error(c) => write!(f, "{c}"),
            TokenType::EndOfFile => write!(f, "EOF"),
        }
    }
}

/// A token with location information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub span: SourceSpan,
}

impl Token {
    pub fn new(token_type: TokenType, span: SourceSpan) -> Self {
        Self { token_type, span }
    }

    pub fn eof(location: SourceLocation) -> Self {
        Self {
            token_type: TokenType::EndOfFile,
            span: SourceSpan::from_location(location),
        }
    }

    /// Line the token starts on
    pub fn line(&self) -> u32 {
        self.span.start.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.token_type, self.span.start)
    }
}
