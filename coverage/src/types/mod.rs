//! Domain types for coverage analysis

mod elemental_type;
mod graph;
mod relations;
mod species;

pub use elemental_type::{ElementalType, TYPE_CHART};
pub use graph::TypeGraph;
pub use relations::{DamageRelations, TypeSet};
pub use species::{BaseStats, SpeciesTypeProfile, Stat};
