// src/codegen/catalog.rs
//! The ordered category catalog. Ids are dense and assigned in merge order:
//! core categories, then tokens, then keywords, then expanded vector/matrix types.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{error::GenError, expand::expand_base, input::Inputs};

pub type CategoryId = u32;

/// Categories recognized by later literal analysis; they carry no lexeme.
pub const CORE_CATEGORIES: [&str; 6] = [
    "Undefined",
    "EndOfFile",
    "IntLiteral",
    "FloatLiteral",
    "StringLiteral",
    "Identifier",
];

/// Rust keywords that would make a generated variant name unusable.
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Associated items of the generated `TokenType` / `BaseType` impls (and the hand-written
/// ones next to them); a variant with one of these names would shadow it.
pub const GENERATED_ITEMS: &[&str] = &[
    "ALL", "COUNT", "base_type", "from_u32", "is_literal", "is_sampler", "name",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    Core,
    Token,
    Keyword,
    VectorMatrix,
}

impl CategoryKind {
    pub fn describe(self) -> &'static str {
        match self {
            CategoryKind::Core => "core category",
            CategoryKind::Token => "token",
            CategoryKind::Keyword => "keyword",
            CategoryKind::VectorMatrix => "vector/matrix type",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpec {
    pub id: CategoryId,
    /// Display name; also the generated enum variant.
    pub name: String,
    /// Literal spelling, `None` for core categories.
    pub lexeme: Option<String>,
    pub kind: CategoryKind,
}

/// Category name for a keyword or type spelling: capitalize the first character
/// (`if` -> `If`, `row_major` -> `Row_major`), except `NULL` which becomes `Null`.
pub fn enum_name(word: &str) -> String {
    if word == "NULL" {
        return "Null".to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Checks that `name` can be emitted verbatim as an enum variant.
pub fn validate_variant_name(name: &str) -> Result<(), GenError> {
    let mut chars = name.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !head_ok
        || !tail_ok
        || name == "_"
        || RUST_KEYWORDS.contains(&name)
        || GENERATED_ITEMS.contains(&name)
    {
        return Err(GenError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CategorySpec>,
    by_name: HashMap<String, CategoryId>,
}

impl Catalog {
    pub fn build(inputs: &Inputs) -> Result<Self, GenError> {
        let mut catalog = Catalog::default();

        for name in CORE_CATEGORIES {
            catalog.push(name.to_string(), None, CategoryKind::Core)?;
        }
        for token in &inputs.tokens {
            catalog.push(
                token.name.clone(),
                Some(token.lexeme.clone()),
                CategoryKind::Token,
            )?;
        }
        for keyword in &inputs.keywords {
            catalog.push(
                enum_name(keyword),
                Some(keyword.clone()),
                CategoryKind::Keyword,
            )?;
        }
        for base in &inputs.vector_matrix_types {
            for ty in expand_base(base) {
                catalog.push(ty.name, Some(ty.lexeme), CategoryKind::VectorMatrix)?;
            }
        }

        log::info!(
            "[codegen] catalog: {} categories ({} tokens, {} keywords, {} vector/matrix bases)",
            catalog.len(),
            inputs.tokens.len(),
            inputs.keywords.len(),
            inputs.vector_matrix_types.len()
        );
        Ok(catalog)
    }

    fn push(
        &mut self,
        name: String,
        lexeme: Option<String>,
        kind: CategoryKind,
    ) -> Result<CategoryId, GenError> {
        validate_variant_name(&name)?;
        if let Some(&prev) = self.by_name.get(&name) {
            return Err(GenError::DuplicateName {
                name,
                first: self.entries[prev as usize].kind.describe(),
                second: kind.describe(),
            });
        }
        let id = self.entries.len() as CategoryId;
        self.by_name.insert(name.clone(), id);
        self.entries.push(CategorySpec {
            id,
            name,
            lexeme,
            kind,
        });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategorySpec> {
        self.entries.get(id as usize)
    }

    pub fn by_name(&self, name: &str) -> Option<&CategorySpec> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    /// All categories in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CategorySpec> {
        self.entries.iter()
    }

    /// Lexeme-bearing categories in id order.
    pub fn lexemes(&self) -> impl Iterator<Item = (&str, &CategorySpec)> {
        self.entries
            .iter()
            .filter_map(|c| c.lexeme.as_deref().map(|l| (l, c)))
    }
}
