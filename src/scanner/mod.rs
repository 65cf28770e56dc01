pub mod cursor;
pub mod lexer;
pub mod token;

use crate::error::LexError;
use lexer::Lexer;
use token::SpannedToken;

/// Tokenize a complete source string.
pub fn scan(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let code: Vec<char> = source.chars().collect();
    Lexer::new(&code).tokenize()
}
