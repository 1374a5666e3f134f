//! Length-bucketed trie construction and exact classification.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use shaderlex::codegen::{
    Catalog, GenError, Inputs, LexemeTrie, TokenRecord, TrieNode, generate,
};

fn tok(name: &str, lexeme: &str) -> TokenRecord {
    TokenRecord {
        name: name.to_string(),
        lexeme: lexeme.to_string(),
    }
}

fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|s| s.to_string()).collect()
}

fn scenario() -> Inputs {
    Inputs {
        keywords: words(&["if", "else"]),
        tokens: vec![tok("Plus", "+"), tok("Minus", "-")],
        types: vec![],
        vector_matrix_types: words(&["Float"]),
    }
}

fn name_of(catalog: &Catalog, id: Option<u32>) -> Option<&str> {
    id.and_then(|id| catalog.get(id)).map(|c| c.name.as_str())
}

#[test]
fn scenario_classification() {
    let g = generate(&scenario()).expect("generate");
    assert_eq!(name_of(&g.catalog, g.classify("+")), Some("Plus"));
    assert_eq!(name_of(&g.catalog, g.classify("-")), Some("Minus"));
    assert_eq!(name_of(&g.catalog, g.classify("if")), Some("If"));
    assert_eq!(name_of(&g.catalog, g.classify("else")), Some("Else"));
    assert_eq!(name_of(&g.catalog, g.classify("Float2x3")), Some("Float2x3"));
    assert_eq!(g.classify("nope"), None);
}

#[test]
fn every_declared_lexeme_round_trips() {
    let g = generate(&scenario()).expect("generate");
    for (lexeme, spec) in g.catalog.lexemes() {
        assert_eq!(g.classify(lexeme), Some(spec.id), "lexeme {lexeme:?}");
    }
    assert_eq!(g.trie.lexeme_count(), g.catalog.lexemes().count());
}

#[test]
fn near_misses_are_not_fixed_tokens() {
    let g = generate(&scenario()).expect("generate");
    for candidate in [
        "", "i", "iff", "IF", "f", "els", "elsE", "++", "Float", "Float5", "Float2x5", "float2x3",
        "Float2x3 ", "Float22",
    ] {
        assert_eq!(g.classify(candidate), None, "candidate {candidate:?}");
    }
}

#[test]
fn length_gating_with_prefix_lexemes() {
    let inputs = Inputs {
        keywords: words(&["if", "ifx", "i"]),
        ..Inputs::default()
    };
    let catalog = Catalog::build(&inputs).expect("catalog");
    let trie = LexemeTrie::build(&catalog).expect("trie");

    assert_eq!(name_of(&catalog, trie.classify("i")), Some("I"));
    assert_eq!(name_of(&catalog, trie.classify("if")), Some("If"));
    assert_eq!(name_of(&catalog, trie.classify("ifx")), Some("Ifx"));
    assert_eq!(trie.classify("ify"), None);

    // one bucket per length, each with exactly one lexeme
    let lens: Vec<usize> = trie.buckets().iter().map(|b| b.len).collect();
    assert_eq!(lens, vec![1, 2, 3]);
    for b in trie.buckets() {
        assert_eq!(b.count, 1);
        assert_eq!(b.root.leaf_count(), 1);
    }
}

#[test]
fn single_lexeme_bucket_is_a_full_chain() {
    let inputs = Inputs {
        keywords: words(&["while"]),
        ..Inputs::default()
    };
    let catalog = Catalog::build(&inputs).expect("catalog");
    let trie = LexemeTrie::build(&catalog).expect("trie");
    let bucket = trie.bucket(5).expect("bucket 5");

    let mut node = &bucket.root;
    let mut depth = 0;
    while let TrieNode::Branch(children) = node {
        assert_eq!(children.len(), 1);
        let (&byte, child) = children.iter().next().expect("child");
        assert_eq!(byte, b"while"[depth]);
        node = child;
        depth += 1;
    }
    assert_eq!(depth, 5);
    assert_eq!(node, &TrieNode::Leaf(catalog.by_name("While").expect("While").id));
}

#[test]
fn shared_prefixes_share_branches() {
    let inputs = Inputs {
        tokens: vec![
            tok("Less", "<"),
            tok("LessEqual", "<="),
            tok("LessLess", "<<"),
            tok("LessLessEqual", "<<="),
        ],
        ..Inputs::default()
    };
    let catalog = Catalog::build(&inputs).expect("catalog");
    let trie = LexemeTrie::build(&catalog).expect("trie");
    let two = trie.bucket(2).expect("bucket 2");
    match &two.root {
        TrieNode::Branch(children) => {
            assert_eq!(children.len(), 1, "both two-byte lexemes start with '<'");
            assert_eq!(children[&b'<'].leaf_count(), 2);
        }
        leaf => panic!("root should branch, got {leaf:?}"),
    }
}

#[test]
fn duplicate_lexeme_is_rejected() {
    let inputs = Inputs {
        tokens: vec![tok("Plus", "+"), tok("Add", "+")],
        ..Inputs::default()
    };
    let catalog = Catalog::build(&inputs).expect("catalog");
    match LexemeTrie::build(&catalog) {
        Err(GenError::DuplicateLexeme {
            lexeme,
            first,
            second,
        }) => {
            assert_eq!(lexeme, "+");
            assert_eq!(first, "Plus");
            assert_eq!(second, "Add");
        }
        other => panic!("expected DuplicateLexeme, got {other:?}"),
    }
}

#[test]
fn keyword_spelled_like_a_token_is_rejected() {
    let inputs = Inputs {
        tokens: vec![tok("Kw", "do")],
        keywords: words(&["do"]),
        ..Inputs::default()
    };
    assert!(matches!(
        generate(&inputs),
        Err(GenError::DuplicateLexeme { .. })
    ));
}

#[test]
fn random_strings_only_match_declared_lexemes() {
    let g = generate(&scenario()).expect("generate");
    let alphabet = b"+-ifelsFoat1234x";
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5_000 {
        let len = rng.random_range(0..=9);
        let candidate: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
            .collect();
        let declared = g.catalog.lexemes().find(|(l, _)| *l == candidate).map(|(_, c)| c.id);
        assert_eq!(g.classify(&candidate), declared, "candidate {candidate:?}");
    }
}

proptest! {
    #[test]
    fn classify_is_exact_over_arbitrary_word_sets(
        set in prop::collection::btree_set("[a-z][a-z0-9]{0,6}", 1..40),
        candidate in "[a-z0-9]{0,8}",
    ) {
        // `self` and friends capitalize into Rust keywords; keep the set to plain words.
        let set: Vec<String> = set.into_iter().filter(|w| w != "self").collect();
        let inputs = Inputs { keywords: set.clone(), ..Inputs::default() };
        let catalog = Catalog::build(&inputs).unwrap();
        let trie = LexemeTrie::build(&catalog).unwrap();

        for w in &set {
            let id = trie.classify(w);
            prop_assert!(id.is_some());
            prop_assert_eq!(catalog.get(id.unwrap()).and_then(|c| c.lexeme.as_deref()), Some(w.as_str()));
        }
        prop_assert_eq!(trie.classify(&candidate).is_some(), set.contains(&candidate));
    }
}
