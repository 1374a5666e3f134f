// src/main.rs
// Classify each argument the way the HLSL scanner would and print its category.
// Usage:
//   cargo run -- float4x4 "+=" NULL 0x1F 1.5f myVar

use std::env;

use shaderlex::hlsl::Token;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut words: Vec<String> = env::args().skip(1).collect();
    if words.is_empty() {
        words = ["float2x3", "SamplerState", "<<=", "if", "NULL", "-0.5f", "\"hi\"", "foo", "@"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    for (i, w) in words.iter().enumerate() {
        let tok = Token::classify(w, i as u32 + 1);
        match tok.kind.base_type() {
            Some(base) => {
                let sampler = if base.is_sampler() { " (sampler)" } else { "" };
                println!("{:<40} base type {base}{sampler}", tok.to_string());
            }
            None => println!("{tok}"),
        }
    }
}
