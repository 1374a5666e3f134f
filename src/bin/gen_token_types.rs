// src/bin/gen_token_types.rs
// Run the token table generator outside of cargo's build script and keep the results.
// Usage:
//   cargo run --bin gen_token_types                          # data/hlsl -> generated/
//   cargo run --bin gen_token_types -- <data_dir> <out_dir>
//
// Writes token_type.rs, base_type.rs (identical to what build.rs puts in OUT_DIR) and
// catalog.json, a flat dump of every category with its lexeme and base type.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use shaderlex::codegen::{self, InputPaths, Inputs};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = PathBuf::from(env::args().nth(1).unwrap_or_else(|| "data/hlsl".to_string()));
    let out_dir = PathBuf::from(env::args().nth(2).unwrap_or_else(|| "generated".to_string()));

    let paths = InputPaths::in_dir(&data_dir);
    let inputs = Inputs::load(&paths)
        .with_context(|| format!("reading token lists from {}", data_dir.display()))?;
    let generated = codegen::generate(&inputs).context("generating token tables")?;

    generated
        .write_with_catalog_to(&out_dir)
        .with_context(|| format!("writing generated sources to {}", out_dir.display()))?;

    println!(
        "[gen_token_types] {} categories, {} fixed lexemes in {} length buckets, {} base types",
        generated.catalog.len(),
        generated.trie.lexeme_count(),
        generated.trie.buckets().len(),
        generated.tables.base_types().len()
    );
    println!("[gen_token_types] wrote {}", out_dir.display());
    Ok(())
}
