//! Data sources the cache and graph loader fetch from

use std::future::Future;

use typedex_coverage::{DamageRelations, ElementalType, SpeciesTypeProfile, TypeGraph};

use crate::error::FetchError;

/// Per-species type and stat data
pub trait SpeciesSource: Send + Sync {
    /// Fetch one species by display name or slug
    ///
    /// Unknown species fail with [`FetchError::NotFound`].
    fn fetch_species(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<SpeciesTypeProfile, FetchError>> + Send;
}

/// The type list and per-type damage relations
pub trait TypeSource: Send + Sync {
    /// Every competitive type, pseudo-types excluded
    fn list_types(&self) -> impl Future<Output = Result<Vec<ElementalType>, FetchError>> + Send;

    fn fetch_type_relations(
        &self,
        t: ElementalType,
    ) -> impl Future<Output = Result<DamageRelations, FetchError>> + Send;
}

/// Serves relations from the built-in chart without any I/O
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTypes;

impl TypeSource for BuiltinTypes {
    async fn list_types(&self) -> Result<Vec<ElementalType>, FetchError> {
        Ok(ElementalType::ALL.to_vec())
    }

    async fn fetch_type_relations(&self, t: ElementalType) -> Result<DamageRelations, FetchError> {
        Ok(DamageRelations::from_chart(t))
    }
}

impl BuiltinTypes {
    pub fn graph(&self) -> TypeGraph {
        TypeGraph::standard()
    }
}
