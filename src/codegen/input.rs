// src/codegen/input.rs
//! Reading the four newline-delimited input lists.
//!
//! Blank lines and lines starting with `//` are ignored. Every other line is one record; the
//! word lists take exactly one field, the token list exactly two (`<CategoryName> <Lexeme>`).

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::error::GenError;

pub const KEYWORDS_FILE: &str = "keywords.txt";
pub const TOKENS_FILE: &str = "tokens.txt";
pub const TYPES_FILE: &str = "types.txt";
pub const VECTOR_MATRIX_TYPES_FILE: &str = "vector_matrix_types.txt";

/// One punctuation/operator record: `Plus +`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub name: String,
    pub lexeme: String,
}

/// Where the input lists live.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub keywords: PathBuf,
    pub tokens: PathBuf,
    pub types: PathBuf,
    pub vector_matrix_types: PathBuf,
}

impl InputPaths {
    /// The conventional layout: all four lists side by side in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            keywords: dir.join(KEYWORDS_FILE),
            tokens: dir.join(TOKENS_FILE),
            types: dir.join(TYPES_FILE),
            vector_matrix_types: dir.join(VECTOR_MATRIX_TYPES_FILE),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [
            &self.keywords,
            &self.tokens,
            &self.types,
            &self.vector_matrix_types,
        ]
    }
}

/// The parsed input lists, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub keywords: Vec<String>,
    pub tokens: Vec<TokenRecord>,
    pub types: Vec<String>,
    pub vector_matrix_types: Vec<String>,
}

impl Inputs {
    pub fn load(paths: &InputPaths) -> Result<Self, GenError> {
        Ok(Self {
            keywords: parse_word_list(&display(&paths.keywords), &read(&paths.keywords)?)?,
            tokens: parse_token_list(&display(&paths.tokens), &read(&paths.tokens)?)?,
            types: parse_word_list(&display(&paths.types), &read(&paths.types)?)?,
            vector_matrix_types: parse_word_list(
                &display(&paths.vector_matrix_types),
                &read(&paths.vector_matrix_types)?,
            )?,
        })
    }
}

fn read(path: &Path) -> Result<String, GenError> {
    fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Yields `(1-based line number, trimmed line)` for every record-bearing line.
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with("//"))
}

pub fn parse_word_list(file: &str, text: &str) -> Result<Vec<String>, GenError> {
    let mut out = Vec::new();
    for (line, record) in records(text) {
        let mut fields = record.split_whitespace();
        let (Some(word), None) = (fields.next(), fields.next()) else {
            return Err(GenError::Malformed {
                file: file.to_string(),
                line,
                text: record.to_string(),
                reason: "expected a single word",
            });
        };
        if !word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            log::warn!("{file}:{line}: {word:?} is not identifier-shaped");
        }
        out.push(word.to_string());
    }
    Ok(out)
}

pub fn parse_token_list(file: &str, text: &str) -> Result<Vec<TokenRecord>, GenError> {
    let mut out = Vec::new();
    for (line, record) in records(text) {
        let mut fields = record.split_whitespace();
        let (Some(name), Some(lexeme), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(GenError::Malformed {
                file: file.to_string(),
                line,
                text: record.to_string(),
                reason: "expected `<CategoryName> <Lexeme>`",
            });
        };
        out.push(TokenRecord {
            name: name.to_string(),
            lexeme: lexeme.to_string(),
        });
    }
    Ok(out)
}
