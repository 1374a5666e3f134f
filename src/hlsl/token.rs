// src/hlsl/token.rs
use std::fmt;

use super::token_type::{TokenType, find_token_type};

/// A single lexeme with its category and the 1-based source line it came from
/// (0 when the line is unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenType,
    pub lexeme: &'a str,
    pub line: u32,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenType, lexeme: &'a str, line: u32) -> Self {
        Self { kind, lexeme, line }
    }

    pub fn classify(lexeme: &'a str, line: u32) -> Self {
        Self::new(find_token_type(lexeme), lexeme, line)
    }

    pub fn end_of_file(line: u32) -> Self {
        Self::new(TokenType::EndOfFile, "", line)
    }
}

impl Default for Token<'_> {
    fn default() -> Self {
        Self::new(TokenType::Undefined, "", 0)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line:{} Lexeme:{} Type:{}",
            self.line, self.lexeme, self.kind
        )
    }
}
