//! Operator and comment scanning
//!
//! Operators are matched longest-first against an explicit table. The
//! table is sorted by descending lexeme length when it is built, so a
//! multi-character operator is always tried before any of its prefixes.

use crate::lexer::{Lexer, TokenType};
use log::warn;
use std::cmp::Reverse;

/// Symbolic operators and delimiters of the language
const OPERATORS: [(&str, TokenType); 16] = [
    (":=", TokenType::Assign),
    ("=", TokenType::Equal),
    (">=", TokenType::GreaterEqual),
    ("<=", TokenType::LessEqual),
    (">", TokenType::Greater),
    ("<", TokenType::Less),
    ("+", TokenType::Plus),
    ("-", TokenType::Minus),
    ("*", TokenType::Star),
    ("/", TokenType::Slash),
    ("^", TokenType::Caret),
    ("&", TokenType::Ampersand),
    (";", TokenType::Semicolon),
    ("(", TokenType::LeftParen),
    (")", TokenType::RightParen),
    ("}", TokenType::RightBrace),
];

/// Build the operator table, longest lexemes first
pub fn operator_table() -> Vec<(&'static str, TokenType)> {
    let mut table = OPERATORS.to_vec();
    table.sort_by_key(|(lexeme, _)| Reverse(lexeme.len()));
    debug_assert!(is_longest_match_ordered(&table));
    table
}

/// True if no operator appears after one of its own proper prefixes
pub fn is_longest_match_ordered(table: &[(&str, TokenType)]) -> bool {
    table.iter().enumerate().all(|(i, (lexeme, _))| {
        table[..i]
            .iter()
            .all(|(earlier, _)| !(lexeme.starts_with(earlier) && lexeme.len() > earlier.len()))
    })
}

impl Lexer {
    /// Match the longest operator at the cursor
    pub(crate) fn match_operator(&self) -> Option<(usize, TokenType)> {
        self.operators.iter().find_map(|(lexeme, token_type)| {
            let matches = lexeme
                .chars()
                .enumerate()
                .all(|(offset, expected)| self.peek_char(offset) == Some(expected));
            matches.then(|| (lexeme.chars().count(), token_type.clone()))
        })
    }

    /// Skip a `{ ... }` comment starting at the cursor
    ///
    /// Returns false when the input ends before the closing brace.
    pub(crate) fn skip_comment(&mut self) -> bool {
        let start_line = self.line;
        self.advance(); // Skip '{'

        while let Some(ch) = self.advance() {
            if ch == '}' {
                return true;
            }
        }

        warn!("Unterminated comment starting on line {start_line}");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_longest_match_ordered() {
        let table = operator_table();
        assert!(is_longest_match_ordered(&table));
        assert_eq!(table.len(), OPERATORS.len());
        assert!(table[..3].iter().all(|(lexeme, _)| lexeme.len() == 2));
    }

    #[test]
    fn test_declaration_order_is_not_longest_match() {
        let bad = [(">", TokenType::Greater), (">=", TokenType::GreaterEqual)];
        assert!(!is_longest_match_ordered(&bad));
    }

    #[test]
    fn test_match_operator_prefers_longer() {
        let lexer = Lexer::new(">=");
        assert_eq!(lexer.match_operator(), Some((2, TokenType::GreaterEqual)));

        let lexer = Lexer::new("> =");
        assert_eq!(lexer.match_operator(), Some((1, TokenType::Greater)));
    }

    #[test]
    fn test_skip_comment() {
        let mut lexer = Lexer::new("{ note } x");
        assert!(lexer.skip_comment());
        assert_eq!(lexer.current_char(), Some(' '));

        let mut lexer = Lexer::new("{ open");
        assert!(!lexer.skip_comment());
        assert_eq!(lexer.current_char(), None);
    }
}
