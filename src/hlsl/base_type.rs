// src/hlsl/base_type.rs
use std::fmt;

include!(concat!(env!("OUT_DIR"), "/base_type.rs"));

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
