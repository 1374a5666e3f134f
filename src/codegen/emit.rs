// src/codegen/emit.rs
//! Renders the catalog, trie and reverse tables as Rust source.
//!
//! Output only depends on the ordered catalog, the `BTreeMap`-ordered trie and the dense
//! tables, so identical inputs always render byte-identical files.

use std::fmt::{self, Write};

use super::{
    catalog::Catalog,
    tables::{ReverseTables, UNDEFINED_NAME},
    trie::{LexemeTrie, TrieNode},
};

pub const GENERATED_HEADER: &str = "// @generated by shaderlex codegen; do not edit.\n";

/// `token_type.rs`: the `TokenType` enum, its name table, the base-type table and the fixed
/// lexeme matcher. Expects `BaseType` to be in scope where it is included.
pub fn emit_token_type(catalog: &Catalog, trie: &LexemeTrie, tables: &ReverseTables) -> String {
    let mut out = String::new();
    // fmt::Write into a String is infallible.
    let _ = write_token_type(&mut out, catalog, trie, tables);
    out
}

/// `base_type.rs`: the `BaseType` enum, its name table and the sampler predicate.
pub fn emit_base_type(tables: &ReverseTables) -> String {
    let mut out = String::new();
    let _ = write_base_type(&mut out, tables);
    out
}

fn write_token_type(
    out: &mut String,
    catalog: &Catalog,
    trie: &LexemeTrie,
    tables: &ReverseTables,
) -> fmt::Result {
    let n = catalog.len();
    out.push_str(GENERATED_HEADER);

    writeln!(out)?;
    writeln!(out, "/// Token categories, dense in catalog order.")?;
    writeln!(out, "#[allow(non_camel_case_types)]")?;
    writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]"
    )?;
    writeln!(out, "#[repr(u32)]")?;
    writeln!(out, "pub enum TokenType {{")?;
    for c in catalog.iter() {
        writeln!(out, "    {} = {},", c.name, c.id)?;
    }
    writeln!(out, "}}")?;

    writeln!(out)?;
    writeln!(out, "impl TokenType {{")?;
    writeln!(out, "    pub const COUNT: usize = {n};")?;
    writeln!(out)?;
    writeln!(out, "    pub const ALL: [TokenType; {n}] = [")?;
    for c in catalog.iter() {
        writeln!(out, "        TokenType::{},", c.name)?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;
    writeln!(out, "    #[inline]")?;
    writeln!(out, "    pub fn name(self) -> &'static str {{")?;
    writeln!(out, "        TOKEN_TYPE_NAMES[self as usize]")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    #[inline]")?;
    writeln!(out, "    pub fn from_u32(v: u32) -> Option<Self> {{")?;
    writeln!(out, "        Self::ALL.get(v as usize).copied()")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    writeln!(out)?;
    writeln!(out, "/// Display names indexed by category id.")?;
    writeln!(out, "pub static TOKEN_TYPE_NAMES: [&str; {n}] = [")?;
    for c in catalog.iter() {
        writeln!(out, "    {:?},", tables.display_name(c.id))?;
    }
    writeln!(out, "];")?;

    writeln!(out)?;
    writeln!(
        out,
        "/// Display name for a raw category id; unknown ids read as `{UNDEFINED_NAME:?}`."
    )?;
    writeln!(out, "pub fn token_type_name(id: u32) -> &'static str {{")?;
    writeln!(out, "    TOKEN_TYPE_NAMES")?;
    writeln!(out, "        .get(id as usize)")?;
    writeln!(out, "        .copied()")?;
    writeln!(out, "        .unwrap_or({UNDEFINED_NAME:?})")?;
    writeln!(out, "}}")?;

    writeln!(out)?;
    writeln!(out, "/// Semantic base type of each category, indexed by category id.")?;
    writeln!(
        out,
        "pub static TOKEN_BASE_TYPES: [Option<BaseType>; {n}] = ["
    )?;
    for c in catalog.iter() {
        match tables.base_type(c.id) {
            Some(base) => writeln!(out, "    Some(BaseType::{}),", base.name)?,
            None => writeln!(out, "    None,")?,
        }
    }
    writeln!(out, "];")?;

    writeln!(out)?;
    writeln!(out, "#[inline]")?;
    writeln!(
        out,
        "pub fn token_type_to_base_type(t: TokenType) -> Option<BaseType> {{"
    )?;
    writeln!(out, "    TOKEN_BASE_TYPES[t as usize]")?;
    writeln!(out, "}}")?;

    writeln!(out)?;
    writeln!(
        out,
        "/// Exact match against every fixed lexeme: length first, then one byte per position."
    )?;
    writeln!(
        out,
        "pub fn find_fixed_token(lexeme: &str) -> Option<TokenType> {{"
    )?;
    writeln!(out, "    let b = lexeme.as_bytes();")?;
    writeln!(out, "    match b.len() {{")?;
    for bucket in trie.buckets() {
        indent(out, 2);
        write!(out, "{} => ", bucket.len)?;
        write_node(out, &bucket.root, 0, 2, tables)?;
        writeln!(out, ",")?;
    }
    writeln!(out, "        _ => None,")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")
}

fn write_node(
    out: &mut String,
    node: &TrieNode,
    depth: usize,
    level: usize,
    tables: &ReverseTables,
) -> fmt::Result {
    match node {
        TrieNode::Leaf(id) => write!(out, "Some(TokenType::{})", tables.display_name(*id)),
        TrieNode::Branch(children) => {
            writeln!(out, "match b[{depth}] {{")?;
            for (byte, child) in children {
                indent(out, level + 1);
                write!(out, "{} => ", byte_literal(*byte))?;
                write_node(out, child, depth + 1, level + 1, tables)?;
                writeln!(out, ",")?;
            }
            indent(out, level + 1);
            writeln!(out, "_ => None,")?;
            indent(out, level);
            write!(out, "}}")
        }
    }
}

fn write_base_type(out: &mut String, tables: &ReverseTables) -> fmt::Result {
    let bases = tables.base_types();
    let n = bases.len();
    out.push_str(GENERATED_HEADER);

    writeln!(out)?;
    writeln!(out, "/// Semantic base types, dense in declaration order.")?;
    writeln!(out, "#[allow(non_camel_case_types)]")?;
    writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]"
    )?;
    // A zero-variant enum cannot carry a repr or be cast.
    if n > 0 {
        writeln!(out, "#[repr(u32)]")?;
    }
    writeln!(out, "pub enum BaseType {{")?;
    for b in bases {
        writeln!(out, "    {} = {},", b.name, b.id)?;
    }
    writeln!(out, "}}")?;

    let samplers: Vec<String> = bases
        .iter()
        .filter(|b| b.sampler)
        .map(|b| format!("BaseType::{}", b.name))
        .collect();

    writeln!(out)?;
    writeln!(out, "impl BaseType {{")?;
    writeln!(out, "    pub const COUNT: usize = {n};")?;
    writeln!(out)?;
    writeln!(out, "    pub const ALL: [BaseType; {n}] = [")?;
    for b in bases {
        writeln!(out, "        BaseType::{},", b.name)?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;
    writeln!(out, "    /// Source spelling of the type.")?;
    writeln!(out, "    #[inline]")?;
    writeln!(out, "    pub fn name(self) -> &'static str {{")?;
    if n > 0 {
        writeln!(out, "        BASE_TYPE_NAMES[self as usize]")?;
    } else {
        writeln!(out, "        match self {{}}")?;
    }
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    #[inline]")?;
    writeln!(out, "    pub fn from_u32(v: u32) -> Option<Self> {{")?;
    writeln!(out, "        Self::ALL.get(v as usize).copied()")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    /// Opaque sampler-like types.")?;
    writeln!(out, "    #[inline]")?;
    writeln!(out, "    pub fn is_sampler(self) -> bool {{")?;
    if n == 0 {
        writeln!(out, "        match self {{}}")?;
    } else if samplers.is_empty() {
        writeln!(out, "        let _ = self;")?;
        writeln!(out, "        false")?;
    } else {
        writeln!(out, "        matches!(self, {})", samplers.join(" | "))?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    writeln!(out)?;
    writeln!(out, "/// Source spellings indexed by base type id.")?;
    writeln!(out, "pub static BASE_TYPE_NAMES: [&str; {n}] = [")?;
    for b in bases {
        writeln!(out, "    {:?},", b.display)?;
    }
    writeln!(out, "];")?;

    writeln!(out)?;
    writeln!(
        out,
        "/// Spelling for a raw base type id; unknown ids read as `{UNDEFINED_NAME:?}`."
    )?;
    writeln!(out, "pub fn base_type_name(id: u32) -> &'static str {{")?;
    writeln!(out, "    BASE_TYPE_NAMES")?;
    writeln!(out, "        .get(id as usize)")?;
    writeln!(out, "        .copied()")?;
    writeln!(out, "        .unwrap_or({UNDEFINED_NAME:?})")?;
    writeln!(out, "}}")
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("    ");
    }
}

/// Pattern for one byte in the generated matcher.
pub fn byte_literal(b: u8) -> String {
    match b {
        b'\'' => "b'\\''".to_string(),
        b'\\' => "b'\\\\'".to_string(),
        0x20..=0x7e => format!("b'{}'", b as char),
        _ => format!("0x{b:02x}"),
    }
}
