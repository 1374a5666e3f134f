// src/codegen/tables.rs
//! Reverse relations over the catalog, stored densely by category id.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{
    catalog::{Catalog, CategoryId, enum_name},
    error::GenError,
    expand::expand_base,
    input::Inputs,
};

pub type BaseTypeId = u32;

/// Returned for any id outside the catalog.
pub const UNDEFINED_NAME: &str = "Undefined";

const SCALAR_ORIGIN: &str = "scalar type";
const EXPANDED_ORIGIN: &str = "vector/matrix type";

/// Opaque sampler-like base types.
pub const SAMPLER_TYPES: [&str; 3] = ["Sampler", "SamplerState", "SamplerComparisonState"];

/// A semantic type descriptor on the AST side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseTypeSpec {
    pub id: BaseTypeId,
    /// Variant name (`Float2x3`).
    pub name: String,
    /// Source spelling (`float2x3`).
    pub display: String,
    pub sampler: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ReverseTables {
    names: Vec<String>,
    token_base: Vec<Option<BaseTypeId>>,
    base_types: Vec<BaseTypeSpec>,
}

impl ReverseTables {
    /// Scalar types come first, in list order, followed by every expanded vector/matrix type.
    /// A scalar type maps from the category whose name is `enum_name(spelling)`.
    pub fn build(catalog: &Catalog, inputs: &Inputs) -> Result<Self, GenError> {
        let mut tables = ReverseTables {
            names: catalog.iter().map(|c| c.name.clone()).collect(),
            token_base: vec![None; catalog.len()],
            base_types: Vec::new(),
        };
        let mut taken: HashMap<String, &'static str> = HashMap::new();

        let scalars = inputs
            .types
            .iter()
            .map(|spelling| (enum_name(spelling), spelling.clone(), SCALAR_ORIGIN));
        let dimensioned = inputs
            .vector_matrix_types
            .iter()
            .flat_map(|base| expand_base(base))
            .map(|ty| (ty.name, ty.lexeme, EXPANDED_ORIGIN));

        for (name, spelling, origin) in scalars.chain(dimensioned) {
            let Some(category) = catalog.by_name(&name) else {
                return Err(GenError::UnknownTypeCategory { spelling, name });
            };
            if let Some(first) = taken.insert(name.clone(), origin) {
                return Err(GenError::DuplicateName {
                    name,
                    first,
                    second: origin,
                });
            }
            let id = tables.base_types.len() as BaseTypeId;
            tables.token_base[category.id as usize] = Some(id);
            tables.base_types.push(BaseTypeSpec {
                id,
                sampler: SAMPLER_TYPES.contains(&name.as_str()),
                name,
                display: spelling,
            });
        }

        log::info!(
            "[codegen] tables: {} base types ({} scalar)",
            tables.base_types.len(),
            inputs.types.len()
        );
        Ok(tables)
    }

    /// Total: ids outside the catalog get [`UNDEFINED_NAME`].
    pub fn display_name(&self, id: CategoryId) -> &str {
        self.names
            .get(id as usize)
            .map_or(UNDEFINED_NAME, String::as_str)
    }

    /// Partial: only scalar/vector/matrix type categories have a base type.
    pub fn base_type(&self, id: CategoryId) -> Option<&BaseTypeSpec> {
        let base = (*self.token_base.get(id as usize)?)?;
        self.base_types.get(base as usize)
    }

    pub fn base_type_name(&self, id: BaseTypeId) -> &str {
        self.base_types
            .get(id as usize)
            .map_or(UNDEFINED_NAME, |b| b.display.as_str())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn token_base_types(&self) -> &[Option<BaseTypeId>] {
        &self.token_base
    }

    pub fn base_types(&self) -> &[BaseTypeSpec] {
        &self.base_types
    }
}
