//! # Lexer for Intcode Tokens
//!
//! Source is split on the separator first; each piece is then lexed and must
//! hold exactly one integer literal. Whitespace around it (a trailing newline
//! from a file, spaces after a comma) is skipped.

use intcode_spec::Cell;
use logos::Logos;

/// Tokens inside one separator-delimited piece
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Signed decimal integer; literals that overflow a cell are lex errors
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<Cell>().ok())]
    Number(Cell),
}

/// Lex a piece into a single cell value
///
/// Returns `None` if the piece is empty, holds anything but one integer, or
/// the integer does not fit a cell.
pub fn lex_cell(piece: &str) -> Option<Cell> {
    let mut lex = Token::lexer(piece);
    let value = match lex.next() {
        Some(Ok(Token::Number(n))) => n,
        _ => return None,
    };
    match lex.next() {
        None => Some(value),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_numbers() {
        let mut lex = Token::lexer("42 -10 +7");
        assert_eq!(lex.next(), Some(Ok(Token::Number(42))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(-10))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(7))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_skips_whitespace() {
        let mut lex = Token::lexer("  99\n");
        assert_eq!(lex.next(), Some(Ok(Token::Number(99))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_rejects_garbage() {
        let mut lex = Token::lexer("abc");
        assert!(matches!(lex.next(), Some(Err(_))));
    }

    #[test]
    fn test_lex_cell() {
        assert_eq!(lex_cell("1"), Some(1));
        assert_eq!(lex_cell(" 99\r\n"), Some(99));
        assert_eq!(lex_cell("-3"), Some(-3));
        assert_eq!(lex_cell(""), None);
        assert_eq!(lex_cell("   "), None);
        assert_eq!(lex_cell("1 2"), None);
        assert_eq!(lex_cell("1-2"), None);
        assert_eq!(lex_cell("3.14"), None);
        assert_eq!(lex_cell("0x10"), None);
        assert_eq!(lex_cell("99999999999999999999"), None);
    }
}
