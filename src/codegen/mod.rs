// src/codegen/mod.rs
//! Build-time generator for the token category enum, the fixed-lexeme matcher and the
//! category reverse tables.
//!
//! Pipeline: input lists -> [`expand`] -> [`catalog`] -> {[`trie`] -> matcher} and
//! {[`tables`]}, then [`emit`] renders both as Rust source. Everything runs once per build
//! and either produces every artifact or none.
pub mod catalog;
pub mod emit;
pub mod error;
pub mod expand;
pub mod input;
pub mod io;
pub mod tables;
pub mod trie;

use std::{path::Path, time::Instant};

pub use catalog::{Catalog, CategoryId, CategoryKind, CategorySpec, enum_name};
pub use error::GenError;
pub use input::{InputPaths, Inputs, TokenRecord};
pub use tables::{BaseTypeSpec, ReverseTables, UNDEFINED_NAME};
pub use trie::{LexemeTrie, TrieNode};

pub const TOKEN_TYPE_RS: &str = "token_type.rs";
pub const BASE_TYPE_RS: &str = "base_type.rs";
pub const CATALOG_JSON: &str = "catalog.json";

/// Everything one generation run produces.
#[derive(Debug)]
pub struct Generated {
    pub catalog: Catalog,
    pub trie: LexemeTrie,
    pub tables: ReverseTables,
    pub token_type_rs: String,
    pub base_type_rs: String,
}

pub fn generate(inputs: &Inputs) -> Result<Generated, GenError> {
    let t0 = Instant::now();
    let catalog = Catalog::build(inputs)?;
    let trie = LexemeTrie::build(&catalog)?;
    let tables = ReverseTables::build(&catalog, inputs)?;
    let token_type_rs = emit::emit_token_type(&catalog, &trie, &tables);
    let base_type_rs = emit::emit_base_type(&tables);
    log::info!(
        "[codegen] generated {} + {} bytes in {} ms",
        token_type_rs.len(),
        base_type_rs.len(),
        t0.elapsed().as_millis()
    );
    Ok(Generated {
        catalog,
        trie,
        tables,
        token_type_rs,
        base_type_rs,
    })
}

impl Generated {
    /// Classifies through the in-memory trie; the emitted matcher agrees with this.
    pub fn classify(&self, lexeme: &str) -> Option<CategoryId> {
        self.trie.classify(lexeme)
    }

    /// Writes `token_type.rs` and `base_type.rs` into `dir` as one unit: either both files
    /// are replaced or neither is.
    pub fn write_to(&self, dir: &Path) -> Result<(), GenError> {
        let token_type = dir.join(TOKEN_TYPE_RS);
        let base_type = dir.join(BASE_TYPE_RS);
        io::write_all_atomic(&[
            (token_type.as_path(), self.token_type_rs.as_str()),
            (base_type.as_path(), self.base_type_rs.as_str()),
        ])
    }

    /// Like [`Generated::write_to`], with `catalog.json` committed alongside.
    pub fn write_with_catalog_to(&self, dir: &Path) -> Result<(), GenError> {
        let token_type = dir.join(TOKEN_TYPE_RS);
        let base_type = dir.join(BASE_TYPE_RS);
        let catalog = dir.join(CATALOG_JSON);
        let catalog_json = self.catalog_json()?;
        io::write_all_atomic(&[
            (token_type.as_path(), self.token_type_rs.as_str()),
            (base_type.as_path(), self.base_type_rs.as_str()),
            (catalog.as_path(), catalog_json.as_str()),
        ])
    }

    pub fn catalog_json(&self) -> Result<String, GenError> {
        io::catalog_json(&self.catalog, &self.tables)
    }
}
