// src/codegen/error.rs
use std::path::PathBuf;

use thiserror::Error;

use super::catalog::CategoryId;

/// Everything that can abort a generation run. None of these are recoverable: a failed run
/// writes nothing.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}:{line}: malformed record {text:?} ({reason})")]
    Malformed {
        file: String,
        line: usize,
        text: String,
        reason: &'static str,
    },

    #[error("category name {name:?} is declared twice ({first} and {second})")]
    DuplicateName {
        name: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("lexeme {lexeme:?} is claimed by both {first} and {second}")]
    DuplicateLexeme {
        lexeme: String,
        first: String,
        second: String,
    },

    #[error("category {name} (id {id}) has an empty lexeme")]
    EmptyLexeme { name: String, id: CategoryId },

    #[error("{name:?} cannot be used as a generated variant name")]
    InvalidName { name: String },

    #[error("type {spelling:?} has no token category named {name}")]
    UnknownTypeCategory { spelling: String, name: String },

    #[error("catalog json: {0}")]
    Json(#[from] serde_json::Error),
}
