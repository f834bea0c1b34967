//! Base stat summaries for a pair of rosters

use crate::types::{SpeciesTypeProfile, Stat};

/// Totals and rounded averages of a roster's base stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamStats {
    pub size: usize,
    totals: [u32; 6],
    averages: [u32; 6],
}

impl TeamStats {
    /// Summarise a roster; an empty roster has all-zero totals and averages
    pub fn new(roster: &[SpeciesTypeProfile]) -> Self {
        let mut totals = [0u32; 6];
        for species in roster {
            for stat in Stat::ALL {
                totals[stat.index()] += u32::from(species.stats.get(stat));
            }
        }

        let size = roster.len();
        let averages = totals.map(|total| rounded_div(total, size));
        Self {
            size,
            totals,
            averages,
        }
    }

    pub fn total(&self, stat: Stat) -> u32 {
        self.totals[stat.index()]
    }

    pub fn average(&self, stat: Stat) -> u32 {
        self.averages[stat.index()]
    }
}

/// One stat of team 1 against the same stat of team 2
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatComparison {
    pub stat: Stat,
    pub team1_average: u32,
    pub team2_average: u32,
    /// `(team1 - team2) / team2` as a percentage; `None` when team 2 averages 0
    pub difference_pct: Option<f64>,
}

/// Compare the six average stats, in [`Stat::ALL`] order
pub fn compare_stats(team1: &TeamStats, team2: &TeamStats) -> Vec<StatComparison> {
    Stat::ALL
        .iter()
        .map(|stat| {
            let a = team1.average(*stat);
            let b = team2.average(*stat);
            StatComparison {
                stat: *stat,
                team1_average: a,
                team2_average: b,
                difference_pct: (b != 0)
                    .then(|| (f64::from(a) - f64::from(b)) / f64::from(b) * 100.0),
            }
        })
        .collect()
}

/// A roster member's place in the combined speed order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedEntry {
    pub name: String,
    pub speed: u16,
    /// 1 or 2
    pub team: u8,
}

/// Every member of both rosters, fastest first
///
/// Ties keep team 1 ahead of team 2 and roster order within a team.
pub fn speed_ranking(team1: &[SpeciesTypeProfile], team2: &[SpeciesTypeProfile]) -> Vec<SpeedEntry> {
    let mut entries: Vec<SpeedEntry> = [(1u8, team1), (2u8, team2)]
        .into_iter()
        .flat_map(|(team, roster)| {
            roster.iter().map(move |species| SpeedEntry {
                name: species.name.clone(),
                speed: species.stats.speed,
                team,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.speed.cmp(&a.speed));
    entries
}

fn rounded_div(total: u32, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let count = count as u32;
    (total * 2 + count) / (count * 2)
}
