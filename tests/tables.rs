//! Reverse tables: display names and semantic base types.

use shaderlex::codegen::{
    Catalog, GenError, Inputs, ReverseTables, TokenRecord, UNDEFINED_NAME, generate,
};

fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|s| s.to_string()).collect()
}

fn scenario() -> Inputs {
    Inputs {
        keywords: words(&["if", "else"]),
        tokens: vec![
            TokenRecord {
                name: "Plus".into(),
                lexeme: "+".into(),
            },
            TokenRecord {
                name: "Minus".into(),
                lexeme: "-".into(),
            },
        ],
        types: vec![],
        vector_matrix_types: words(&["Float"]),
    }
}

#[test]
fn display_names_are_total_with_sentinel() {
    let g = generate(&scenario()).expect("generate");
    let if_id = g.classify("if").expect("if");
    assert_eq!(g.tables.display_name(if_id), "If");

    let mut seen = std::collections::HashSet::new();
    for c in g.catalog.iter() {
        let name = g.tables.display_name(c.id);
        assert!(seen.insert(name), "duplicate display name {name}");
        if c.id != 0 {
            assert_ne!(name, UNDEFINED_NAME);
        }
    }

    let past_end = g.catalog.len() as u32;
    assert_eq!(g.tables.display_name(past_end), UNDEFINED_NAME);
    assert_eq!(g.tables.display_name(u32::MAX), UNDEFINED_NAME);
}

#[test]
fn expanded_categories_round_trip_to_base_types() {
    let g = generate(&scenario()).expect("generate");
    for rows in 1..=4 {
        let vector = format!("Float{rows}");
        let id = g.classify(&vector).expect("vector");
        assert_eq!(g.tables.base_type(id).map(|b| b.display.as_str()), Some(vector.as_str()));

        for cols in 1..=4 {
            let matrix = format!("Float{rows}x{cols}");
            let id = g.classify(&matrix).expect("matrix");
            let base = g.tables.base_type(id).expect("base type");
            assert_eq!(base.display, matrix);
            assert_eq!(base.name, matrix);
            assert!(!base.sampler);
        }
    }

    let ids: std::collections::HashSet<u32> = g
        .catalog
        .iter()
        .filter_map(|c| g.tables.base_type(c.id).map(|b| b.id))
        .collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn non_type_categories_have_no_base_type() {
    let g = generate(&scenario()).expect("generate");
    for lexeme in ["+", "-", "if", "else"] {
        let id = g.classify(lexeme).expect("declared");
        assert!(g.tables.base_type(id).is_none(), "{lexeme} is not a type");
    }
    assert!(g.tables.base_type(0).is_none());
    assert!(g.tables.base_type(u32::MAX).is_none());
    assert_eq!(g.tables.base_type_name(u32::MAX), UNDEFINED_NAME);
}

#[test]
fn scalar_types_map_through_their_keyword() {
    let inputs = Inputs {
        keywords: words(&["float", "sampler", "SamplerState"]),
        types: words(&["float", "sampler", "SamplerState"]),
        vector_matrix_types: words(&["float"]),
        ..Inputs::default()
    };
    let g = generate(&inputs).expect("generate");

    let float_kw = g.classify("float").expect("float");
    let base = g.tables.base_type(float_kw).expect("float base");
    assert_eq!((base.id, base.name.as_str(), base.display.as_str()), (0, "Float", "float"));

    let sampler = g.tables.base_type(g.classify("sampler").expect("sampler")).expect("base");
    assert!(sampler.sampler);
    let state = g.tables.base_type(g.classify("SamplerState").expect("state")).expect("base");
    assert!(state.sampler);

    // scalars first, then 20 dimensioned types
    assert_eq!(g.tables.base_types().len(), 3 + 20);
    assert_eq!(g.tables.base_type_name(3), "float1");
    assert_eq!(g.tables.base_types()[3].name, "Float1");
}

#[test]
fn scalar_type_without_category_is_fatal() {
    let inputs = Inputs {
        types: words(&["float"]),
        ..Inputs::default()
    };
    let catalog = Catalog::build(&inputs).expect("catalog");
    match ReverseTables::build(&catalog, &inputs) {
        Err(GenError::UnknownTypeCategory { spelling, name }) => {
            assert_eq!(spelling, "float");
            assert_eq!(name, "Float");
        }
        other => panic!("expected UnknownTypeCategory, got {other:?}"),
    }
}

#[test]
fn scalar_type_listed_twice_is_fatal() {
    let inputs = Inputs {
        keywords: words(&["int"]),
        types: words(&["int", "int"]),
        ..Inputs::default()
    };
    assert!(matches!(
        generate(&inputs),
        Err(GenError::DuplicateName { ref name, first: "scalar type", second: "scalar type" })
            if name == "Int"
    ));
}

#[test]
fn scalar_shadowing_an_expansion_names_both_origins() {
    let inputs = Inputs {
        types: words(&["float2"]),
        vector_matrix_types: words(&["float"]),
        ..Inputs::default()
    };
    let err = generate(&inputs).expect_err("float2 is declared twice");
    assert!(matches!(
        err,
        GenError::DuplicateName { ref name, first: "scalar type", second: "vector/matrix type" }
            if name == "Float2"
    ));
    assert!(err.to_string().contains("scalar type and vector/matrix type"), "{err}");
}
