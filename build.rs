// build.rs: generate the HLSL token tables from data/hlsl into OUT_DIR.
//
// The generator is the crate's own `codegen` module, mounted here by path so the build script
// and the library share one implementation.

#[allow(dead_code, unused_imports)]
#[path = "src/codegen/mod.rs"]
mod codegen;

use anyhow::{Context, Result};
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/codegen");
    println!("cargo:rerun-if-env-changed=SHADERLEX_DATA_DIR");

    // Optional override of the input directory (defaults to the bundled HLSL lists).
    let data_dir = env::var_os("SHADERLEX_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/hlsl"));

    let paths = codegen::InputPaths::in_dir(&data_dir);
    for p in paths.all() {
        println!("cargo:rerun-if-changed={}", p.display());
    }

    let inputs = codegen::Inputs::load(&paths)
        .with_context(|| format!("reading token lists from {}", data_dir.display()))?;
    let generated = match codegen::generate(&inputs) {
        Ok(g) => g,
        Err(e) => {
            println!("cargo:warning=token table generation failed: {e}");
            return Err(e).context("generating token tables");
        }
    };

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").context("OUT_DIR is not set")?);
    generated
        .write_to(&out_dir)
        .with_context(|| format!("writing generated tables to {}", out_dir.display()))?;

    Ok(())
}
