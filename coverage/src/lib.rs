//! Type coverage analysis for Pokemon rosters.
//!
//! This crate holds the pure side of the coverage engine: the type graph,
//! per-species effectiveness rows and team-level reports. Nothing here
//! performs I/O; `typedex-client` fetches the data and feeds it in.
//!
//! # Overview
//!
//! ```text
//! typedex-pokeapi (wire format)
//!        │
//!        ▼
//! typedex-coverage (type graph + coverage math) ← THIS CRATE
//!        │
//!        ▼
//! typedex-client (fetch cache, roster resolution)
//! ```
//!
//! # Main Types
//!
//! - [`ElementalType`] - the 18 battle types
//! - [`DamageRelations`] - one type's double/half/no damage sets
//! - [`TypeGraph`] - complete mapping from type to relations
//! - [`SpeciesTypeProfile`] - a species' types, sprite and base stats
//! - [`EffectivenessRow`] - one multiplier per type
//! - [`TeamCoverageReport`] - roster-wide offensive/defensive summary
//!
//! # Example Usage
//!
//! ```ignore
//! use typedex_coverage::{AggregateOptions, TypeGraph, aggregate};
//!
//! let graph = TypeGraph::standard();
//! let report = aggregate(&graph, &roster, &AggregateOptions::default())?;
//!
//! for t in &report.shared_weaknesses {
//!     println!("{} threatens most of the team", t);
//! }
//! ```

pub mod coverage;
mod error;
pub mod query;
pub mod stats;
pub mod types;

pub use coverage::{
    AggregateOptions, EffectivenessRow, MULTIPLIERS, MemberCoverage, TeamCoverageReport,
    aggregate, compare, defensive_multiplier, defensive_row, is_valid_multiplier,
    offensive_multiplier, offensive_row,
};
pub use error::CoverageError;
pub use query::{TypeMatchups, matchups};
pub use stats::{SpeedEntry, StatComparison, TeamStats, compare_stats, speed_ranking};
pub use types::{
    BaseStats, DamageRelations, ElementalType, SpeciesTypeProfile, Stat, TYPE_CHART, TypeGraph,
    TypeSet,
};
