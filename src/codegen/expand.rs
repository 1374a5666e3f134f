// src/codegen/expand.rs
//! Vector/matrix expansion: `float` -> `float1`, `float1x1` .. `float4x4`.

use std::ops::RangeInclusive;

use super::catalog::enum_name;

pub const VECTOR_DIMS: RangeInclusive<u8> = 1..=4;
pub const MATRIX_COLS: RangeInclusive<u8> = 1..=4;

/// Names produced per base: one vector plus one matrix per column count, for every row count.
pub const PER_BASE: usize = 4 * (1 + 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    Vector { rows: u8 },
    Matrix { rows: u8, cols: u8 },
}

impl TypeShape {
    pub fn suffix(self) -> String {
        match self {
            TypeShape::Vector { rows } => format!("{rows}"),
            TypeShape::Matrix { rows, cols } => format!("{rows}x{cols}"),
        }
    }
}

/// One concrete dimensioned type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedType {
    pub shape: TypeShape,
    /// Source spelling, `base + suffix` (`float2x3`).
    pub lexeme: String,
    /// Category / variant name, `enum_name(base) + suffix` (`Float2x3`).
    pub name: String,
}

/// Expands one base name in canonical order: `B1, B1x1, B1x2, B1x3, B1x4, B2, B2x1, ...`.
pub fn expand_base(base: &str) -> Vec<ExpandedType> {
    let stem = enum_name(base);
    let mut out = Vec::with_capacity(PER_BASE);
    for rows in VECTOR_DIMS {
        let shapes = std::iter::once(TypeShape::Vector { rows })
            .chain(MATRIX_COLS.map(|cols| TypeShape::Matrix { rows, cols }));
        for shape in shapes {
            let suffix = shape.suffix();
            out.push(ExpandedType {
                shape,
                lexeme: format!("{base}{suffix}"),
                name: format!("{stem}{suffix}"),
            });
        }
    }
    out
}
