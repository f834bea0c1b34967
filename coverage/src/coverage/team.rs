use super::{EffectivenessRow, defensive_row, offensive_row};
use crate::CoverageError;
use crate::types::{ElementalType, SpeciesTypeProfile, TypeGraph};

/// Tunables for [`aggregate`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateOptions {
    /// A type is a shared weakness when strictly more than this fraction of
    /// members take at least 2x from it
    pub shared_weakness_fraction: f64,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            shared_weakness_fraction: 0.5,
        }
    }
}

/// Rows of a single roster member
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberCoverage {
    pub name: String,
    pub types: Vec<ElementalType>,
    pub offensive: EffectivenessRow,
    pub defensive: EffectivenessRow,
}

impl MemberCoverage {
    pub fn new(graph: &TypeGraph, species: &SpeciesTypeProfile) -> Result<Self, CoverageError> {
        Ok(Self {
            name: species.name.clone(),
            types: species.types().to_vec(),
            offensive: offensive_row(graph, species.types())?,
            defensive: defensive_row(graph, species.types())?,
        })
    }

    pub fn is_weak_to(&self, attacker: ElementalType) -> bool {
        self.defensive[attacker] >= 2.0
    }
}

/// Roster-wide coverage summary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamCoverageReport {
    pub members: Vec<MemberCoverage>,
    /// Best multiplier any member deals to each type
    pub offensive: EffectivenessRow,
    /// Worst multiplier any member takes from each type
    pub defensive: EffectivenessRow,
    /// Best (lowest) multiplier any member takes from each type
    pub best_defensive: EffectivenessRow,
    /// Members taking at least 2x, per attacking type in chart order
    pub weakness_counts: [usize; 18],
    /// Types no member hits at least neutrally
    pub uncovered: Vec<ElementalType>,
    pub shared_weaknesses: Vec<ElementalType>,
}

impl TeamCoverageReport {
    pub fn weakness_count(&self, attacker: ElementalType) -> usize {
        self.weakness_counts[attacker.index()]
    }

    /// Types every member either resists or is immune to
    pub fn resisted_by_all(&self) -> Vec<ElementalType> {
        self.defensive.types_where(|m| m < 1.0)
    }

    pub fn member(&self, name: &str) -> Option<&MemberCoverage> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Merge every member's rows into a team report
pub fn aggregate(
    graph: &TypeGraph,
    roster: &[SpeciesTypeProfile],
    options: &AggregateOptions,
) -> Result<TeamCoverageReport, CoverageError> {
    if roster.is_empty() {
        return Err(CoverageError::EmptyRoster);
    }

    let members = roster
        .iter()
        .map(|species| MemberCoverage::new(graph, species))
        .collect::<Result<Vec<_>, _>>()?;

    let offensive = fold_rows(&members, |m| &m.offensive, f32::max);
    let defensive = fold_rows(&members, |m| &m.defensive, f32::max);
    let best_defensive = fold_rows(&members, |m| &m.defensive, f32::min);

    let mut weakness_counts = [0usize; 18];
    for t in ElementalType::ALL {
        weakness_counts[t.index()] = members.iter().filter(|m| m.is_weak_to(t)).count();
    }

    let threshold = options.shared_weakness_fraction * members.len() as f64;
    let shared_weaknesses = ElementalType::ALL
        .iter()
        .copied()
        .filter(|t| weakness_counts[t.index()] as f64 > threshold)
        .collect();

    Ok(TeamCoverageReport {
        uncovered: offensive.types_where(|m| m < 1.0),
        members,
        offensive,
        defensive,
        best_defensive,
        weakness_counts,
        shared_weaknesses,
    })
}

fn fold_rows(
    members: &[MemberCoverage],
    pick: impl Fn(&MemberCoverage) -> &EffectivenessRow,
    f: fn(f32, f32) -> f32,
) -> EffectivenessRow {
    let (first, rest) = match members.split_first() {
        Some(split) => split,
        None => return EffectivenessRow::splat(1.0),
    };
    rest.iter()
        .fold(*pick(first), |acc, m| acc.zip_with(pick(m), f))
}

/// Aggregate two rosters independently
pub fn compare(
    graph: &TypeGraph,
    team1: &[SpeciesTypeProfile],
    team2: &[SpeciesTypeProfile],
    options: &AggregateOptions,
) -> Result<(TeamCoverageReport, TeamCoverageReport), CoverageError> {
    Ok((
        aggregate(graph, team1, options)?,
        aggregate(graph, team2, options)?,
    ))
}
