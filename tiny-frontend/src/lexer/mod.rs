//! TINY-extended Scanner
//!
//! Tokenizes source text into a stream of tokens. Handles keywords,
//! operators, numeric literals, identifiers, and `{ ... }` comments.
//! The scanner never fails: unknown characters become [`TokenType::Error`]
//! tokens and the parser decides what to do with them.

pub mod token;
pub mod literals;
pub mod operators;

pub use token::{Token, TokenType};

use log::trace;
use tiny_common::{SourceLocation, SourceSpan};
use std::collections::HashMap;

/// TINY-extended scanner
pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    keywords: HashMap<&'static str, TokenType>,
    pub(crate) operators: Vec<(&'static str, TokenType)>,
    exhausted: bool,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords: HashMap::new(),
            operators: operators::operator_table(),
            exhausted: false,
        };

        lexer.initialize_keywords();
        lexer
    }

    /// Initialize keyword map
    fn initialize_keywords(&mut self) {
        let keywords = [
            ("if", TokenType::If),
            ("then", TokenType::Then),
            ("else", TokenType::Else),
            ("end", TokenType::End),
            ("repeat", TokenType::Repeat),
            ("until", TokenType::Until),
            ("read", TokenType::Read),
            ("write", TokenType::Write),
            ("int", TokenType::Int),
            ("real", TokenType::Real),
            ("bool", TokenType::Bool),
            ("true", TokenType::True),
            ("false", TokenType::False),
        ];

        for (keyword, token_type) in keywords {
            self.keywords.insert(keyword, token_type);
        }
    }

    /// Get current character
    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Advance to next character
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Advance by `count` characters
    pub(crate) fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Get current location
    pub(crate) fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Line of the scanner cursor
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Skip spaces, tabs and line breaks
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Tokenize an identifier or keyword
    fn tokenize_word(&mut self) -> TokenType {
        let mut word = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match self.keywords.get(word.as_str()) {
            Some(keyword) => keyword.clone(),
            None => TokenType::Identifier(word),
        }
    }

    /// Get next token
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.exhausted {
                return Token::eof(self.current_location());
            }

            self.skip_whitespace();

            if self.current_char() == Some('{') {
                if !self.skip_comment() {
                    self.exhausted = true;
                }
                continue;
            }

            let start_location = self.current_location();
            let token_type = self.scan_token();
            let end_location = self.current_location();

            if token_type == TokenType::EndOfFile {
                self.exhausted = true;
            }

            let token = Token::new(token_type, SourceSpan::new(start_location, end_location));
            trace!("[{}] {} ({})", token.line(), token.token_type, token.token_type.kind_name());
            return token;
        }
    }

    /// Scan one token starting at a non-blank, non-comment character
    fn scan_token(&mut self) -> TokenType {
        let Some(ch) = self.current_char() else {
            return TokenType::EndOfFile;
        };

        if let Some((len, token_type)) = self.match_operator() {
            self.advance_by(len);
            return token_type;
        }

        if ch.is_ascii_digit() || (ch == '.' && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())) {
            return self.tokenize_number();
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            return self.tokenize_word();
        }

        self.advance();
        TokenType::Error(ch)
    }

    /// Tokenize entire input into a vector of tokens ending with EOF
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = matches!(token.token_type, TokenType::EndOfFile);
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_types(input: &str) -> Vec<TokenType> {
        Lexer::new(input).tokenize().into_iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn test_keywords() {
        let tokens = token_types("if then else end repeat until read write int real bool true false");

        assert_eq!(tokens.len(), 14); // 13 keywords + EOF
        assert_eq!(tokens[0], TokenType::If);
        assert_eq!(tokens[4], TokenType::Repeat);
        assert_eq!(tokens[8], TokenType::Int);
        assert_eq!(tokens[12], TokenType::False);
        assert_eq!(tokens[13], TokenType::EndOfFile);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let tokens = token_types("If WRITE");
        assert_eq!(tokens[0], TokenType::Identifier("If".to_string()));
        assert_eq!(tokens[1], TokenType::Identifier("WRITE".to_string()));
    }

    #[test]
    fn test_operators() {
        let tokens = token_types(":= = < > >= <= + - * / ^ & ; ( )");

        let expected = vec![
            TokenType::Assign, TokenType::Equal, TokenType::Less, TokenType::Greater,
            TokenType::GreaterEqual, TokenType::LessEqual, TokenType::Plus, TokenType::Minus,
            TokenType::Star, TokenType::Slash, TokenType::Caret, TokenType::Ampersand,
            TokenType::Semicolon, TokenType::LeftParen, TokenType::RightParen,
            TokenType::EndOfFile,
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_longest_match_without_spaces() {
        let tokens = token_types("x>=1<=y");
        assert_eq!(tokens[1], TokenType::GreaterEqual);
        assert_eq!(tokens[3], TokenType::LessEqual);
    }

    #[test]
    fn test_numbers() {
        let tokens = token_types("42 3.5 .25 7. 1.2.3");
        assert_eq!(tokens[0], TokenType::Number("42".to_string()));
        assert_eq!(tokens[1], TokenType::Number("3.5".to_string()));
        assert_eq!(tokens[2], TokenType::Number(".25".to_string()));
        assert_eq!(tokens[3], TokenType::Number("7.".to_string()));
        // at most one decimal point per literal
        assert_eq!(tokens[4], TokenType::Number("1.2".to_string()));
        assert_eq!(tokens[5], TokenType::Number(".3".to_string()));
    }

    #[test]
    fn test_identifiers() {
        let tokens = token_types("variable _private var123 x_1");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], TokenType::Identifier("variable".to_string()));
        assert_eq!(tokens[1], TokenType::Identifier("_private".to_string()));
        assert_eq!(tokens[2], TokenType::Identifier("var123".to_string()));
        assert_eq!(tokens[3], TokenType::Identifier("x_1".to_string()));
    }

    #[test]
    fn test_comments_are_skipped_across_lines() {
        let mut lexer = Lexer::new("x { a comment\n spanning := lines } := 1");
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].token_type, TokenType::Identifier("x".to_string()));
        assert_eq!(tokens[1].token_type, TokenType::Assign);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_unterminated_comment_ends_input() {
        let tokens = token_types("x := 1 { never closed\n write x");
        assert_eq!(
            tokens,
            vec![
                TokenType::Identifier("x".to_string()),
                TokenType::Assign,
                TokenType::Number("1".to_string()),
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_error_token() {
        let tokens = token_types("x := 1 # 2");
        assert_eq!(tokens[3], TokenType::Error('#'));
        assert_eq!(tokens[4], TokenType::Number("2".to_string()));
    }

    #[test]
    fn test_lone_colon_is_error_token() {
        let tokens = token_types("x : 1");
        assert_eq!(tokens[1], TokenType::Error(':'));
    }

    #[test]
    fn test_line_numbers() {
        let tokens = Lexer::new("int x;\n\nx := 5;\nwrite x").tokenize();
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[3].line(), 3);
        assert_eq!(tokens[7].line(), 4);
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().token_type, TokenType::Identifier("x".to_string()));
        assert_eq!(lexer.next_token().token_type, TokenType::EndOfFile);
        assert_eq!(lexer.next_token().token_type, TokenType::EndOfFile);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_types(" \t\r\n"), vec![TokenType::EndOfFile]);
    }
}
