//! Async side of the typedex coverage engine.
//!
//! Species data is fetched from PokeAPI through a shared [`FetchCache`]
//! that bounds concurrent requests, coalesces duplicate lookups and expires
//! entries after [`CACHE_EXPIRATION`]. The type graph is loaded once per
//! [`TypedexClient`] and shared read-only.
//!
//! # Example Usage
//!
//! ```ignore
//! use typedex_client::TypedexClient;
//!
//! let client = TypedexClient::new()?;
//! let analysis = client
//!     .analyze_teams(&["Charizard", "Blastoise"], &["Iron Valiant", "Garchomp"])
//!     .await?;
//!
//! println!("team 1 shared weaknesses: {:?}", analysis.report1.shared_weaknesses);
//! ```

pub mod cache;
mod clock;
mod config;
mod engine;
mod error;
mod graph;
#[cfg(test)]
mod mock;
mod pokeapi;
mod source;

use std::time::Duration;

pub use cache::{
    CacheEntry, CacheSnapshot, CacheStats, FetchCache, Resolved, RestoreReport, Source,
    default_snapshot_path,
};
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{CacheConfig, ClientConfig, StalePolicy};
pub use engine::{StatsSummary, TeamAnalysis, TypedexClient};
pub use error::{AnalysisError, FailedMember, FetchError, GraphError, PartialFailure};
pub use graph::load_type_graph;
pub use pokeapi::PokeApiClient;
pub use source::{BuiltinTypes, SpeciesSource, TypeSource};

pub use typedex_coverage as coverage;

/// How long a fetched species stays valid
pub const CACHE_EXPIRATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Default bound on fetches in flight across one cache
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Base name of the persisted species cache
pub const CACHE_KEY: &str = "pokemon-data-cache";
