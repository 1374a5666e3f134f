// src/lib.rs
pub mod codegen;
pub mod hlsl;
