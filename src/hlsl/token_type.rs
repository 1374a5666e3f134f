// src/hlsl/token_type.rs
use std::fmt;

use super::{base_type::BaseType, literal::match_literal};

include!(concat!(env!("OUT_DIR"), "/token_type.rs"));

/// Classifies a complete lexeme: fixed tokens (operators, keywords, vector/matrix type names)
/// first, then literal and identifier shapes. Anything else is `Undefined`.
pub fn find_token_type(lexeme: &str) -> TokenType {
    find_fixed_token(lexeme).unwrap_or_else(|| match_literal(lexeme))
}

impl TokenType {
    #[inline]
    pub fn base_type(self) -> Option<BaseType> {
        token_type_to_base_type(self)
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenType::IntLiteral | TokenType::FloatLiteral | TokenType::StringLiteral
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
