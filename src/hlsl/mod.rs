// src/hlsl/mod.rs
//! HLSL token categories and the lookups the scanner and parser use.
//!
//! `token_type` and `base_type` are generated by `build.rs` from `data/hlsl/*.txt`.
pub mod base_type;
pub mod literal;
pub mod token;
pub mod token_type;

pub use base_type::{BASE_TYPE_NAMES, BaseType, base_type_name};
pub use literal::match_literal;
pub use token::Token;
pub use token_type::{
    TOKEN_TYPE_NAMES, TokenType, find_fixed_token, find_token_type, token_type_name,
    token_type_to_base_type,
};
