//! Matchup queries over a loaded type graph
//!
//! Helpers answering "what hurts this type combination" without building
//! a whole team report.

mod matchup;

pub use matchup::{
    TypeMatchups, immunities, is_immune_to, is_weak_to_any, matchups, resistances, resists_all,
    weaknesses,
};
