// src/codegen/trie.rs
//! Length-bucketed byte tries over every fixed lexeme.
//!
//! Lexemes are only ever compared against lexemes of the same length, so the length of the
//! input picks a bucket before any byte is inspected. Inside a bucket the trie branches on
//! position 0, 1, 2, ... and every leaf sits at depth `len`: a leaf is always a full-length
//! match, never a prefix.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use rayon::prelude::*;

use super::{
    catalog::{Catalog, CategoryId, CategorySpec},
    error::GenError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieNode {
    Leaf(CategoryId),
    /// Children keyed by the byte at this node's depth, in byte order.
    Branch(BTreeMap<u8, TrieNode>),
}

impl TrieNode {
    pub fn leaf_count(&self) -> usize {
        match self {
            TrieNode::Leaf(_) => 1,
            TrieNode::Branch(children) => children.values().map(TrieNode::leaf_count).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthBucket {
    pub len: usize,
    pub count: usize,
    pub root: TrieNode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexemeTrie {
    /// Sorted by `len`, one bucket per distinct lexeme length.
    buckets: Vec<LengthBucket>,
}

type Entry<'a> = (&'a [u8], CategoryId);

impl LexemeTrie {
    /// Builds one trie per lexeme length. Two categories spelling the same lexeme would make
    /// classification ambiguous and are rejected.
    pub fn build(catalog: &Catalog) -> Result<Self, GenError> {
        let mut seen: HashMap<&str, &CategorySpec> = HashMap::new();
        let mut by_len: BTreeMap<usize, Vec<Entry<'_>>> = BTreeMap::new();

        for (lexeme, spec) in catalog.lexemes() {
            if lexeme.is_empty() {
                return Err(GenError::EmptyLexeme {
                    name: spec.name.clone(),
                    id: spec.id,
                });
            }
            if let Some(prev) = seen.insert(lexeme, spec) {
                return Err(GenError::DuplicateLexeme {
                    lexeme: lexeme.to_string(),
                    first: prev.name.clone(),
                    second: spec.name.clone(),
                });
            }
            by_len
                .entry(lexeme.len())
                .or_default()
                .push((lexeme.as_bytes(), spec.id));
        }

        let by_len: Vec<(usize, Vec<Entry<'_>>)> = by_len.into_iter().collect();
        let buckets: Vec<LengthBucket> = by_len
            .into_par_iter()
            .map(|(len, entries)| LengthBucket {
                len,
                count: entries.len(),
                root: build_node(&entries, 0),
            })
            .collect();

        for b in &buckets {
            log::debug!("[codegen] bucket len={} lexemes={}", b.len, b.count);
        }
        log::info!(
            "[codegen] trie: {} lexemes in {} length buckets (longest {})",
            seen.len(),
            buckets.len(),
            buckets.last().map_or(0, |b| b.len)
        );

        Ok(Self { buckets })
    }

    /// Exact classification: `None` means "not a fixed token".
    pub fn classify(&self, lexeme: &str) -> Option<CategoryId> {
        let bytes = lexeme.as_bytes();
        let mut node = &self.bucket(bytes.len())?.root;
        for b in bytes {
            match node {
                TrieNode::Branch(children) => node = children.get(b)?,
                TrieNode::Leaf(_) => return None,
            }
        }
        match node {
            TrieNode::Leaf(id) => Some(*id),
            TrieNode::Branch(_) => None,
        }
    }

    pub fn bucket(&self, len: usize) -> Option<&LengthBucket> {
        self.buckets
            .binary_search_by_key(&len, |b| b.len)
            .ok()
            .map(|i| &self.buckets[i])
    }

    pub fn buckets(&self) -> &[LengthBucket] {
        &self.buckets
    }

    pub fn lexeme_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

// All `entries` share one length and agree on every byte before `depth`.
fn build_node(entries: &[Entry<'_>], depth: usize) -> TrieNode {
    let len = entries[0].0.len();
    if depth == len {
        debug_assert_eq!(entries.len(), 1, "duplicate lexemes reach the same leaf");
        return TrieNode::Leaf(entries[0].1);
    }

    let mut groups: BTreeMap<u8, Vec<Entry<'_>>> = BTreeMap::new();
    for &(bytes, id) in entries {
        groups.entry(bytes[depth]).or_default().push((bytes, id));
    }
    TrieNode::Branch(
        groups
            .into_iter()
            .map(|(b, group)| (b, build_node(&group, depth + 1)))
            .collect(),
    )
}
