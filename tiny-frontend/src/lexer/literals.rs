//! Numeric literal scanning
//!
//! The scanner only collects the lexeme; the parser decides whether it is
//! an integer or a real literal.

use crate::lexer::{Lexer, TokenType};

impl Lexer {
    /// Tokenize a maximal run of digits with at most one decimal point
    pub fn tokenize_number(&mut self) -> TokenType {
        let mut number = String::new();
        let mut seen_point = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
            } else if ch == '.' && !seen_point {
                seen_point = true;
                number.push(ch);
            } else {
                break;
            }
            self.advance();
        }

        TokenType::Number(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_second_point() {
        let mut lexer = Lexer::new("12.5.1");
        assert_eq!(lexer.tokenize_number(), TokenType::Number("12.5".to_string()));
        assert_eq!(lexer.current_char(), Some('.'));
    }

    #[test]
    fn test_stops_at_letter() {
        let mut lexer = Lexer::new("10x");
        assert_eq!(lexer.tokenize_number(), TokenType::Number("10".to_string()));
        assert_eq!(lexer.current_char(), Some('x'));
    }
}
