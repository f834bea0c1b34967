//! Effectiveness rows and team coverage
//!
//! Defence composes multiplicatively (a Water/Ground species takes 2 x 2 = 4x
//! from Grass) while offence takes the best of the species' own types. The
//! two live in separate functions in [`calculator`].

mod calculator;
mod row;
mod team;

pub use calculator::{defensive_multiplier, defensive_row, offensive_multiplier, offensive_row};
pub use row::{EffectivenessRow, MULTIPLIERS, is_valid_multiplier};
pub use team::{AggregateOptions, MemberCoverage, TeamCoverageReport, aggregate, compare};
