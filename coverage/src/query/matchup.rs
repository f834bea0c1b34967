//! Type matchup helpers

use crate::CoverageError;
use crate::coverage::defensive_row;
use crate::types::{ElementalType, TypeGraph};

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(
    graph: &TypeGraph,
    defender_types: &[ElementalType],
    attacking_types: &[ElementalType],
) -> Result<bool, CoverageError> {
    let row = defensive_row(graph, defender_types)?;
    Ok(attacking_types.iter().any(|t| row[*t] > 1.0))
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(
    graph: &TypeGraph,
    defender_types: &[ElementalType],
    attacking_types: &[ElementalType],
) -> Result<bool, CoverageError> {
    if attacking_types.is_empty() {
        return Ok(false);
    }
    let row = defensive_row(graph, defender_types)?;
    Ok(attacking_types.iter().all(|t| row[*t] < 1.0))
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(
    graph: &TypeGraph,
    defender_types: &[ElementalType],
    attacking_type: ElementalType,
) -> Result<bool, CoverageError> {
    Ok(defensive_row(graph, defender_types)?[attacking_type] == 0.0)
}

/// Get all types that are super effective against the defender
pub fn weaknesses(
    graph: &TypeGraph,
    defender_types: &[ElementalType],
) -> Result<Vec<ElementalType>, CoverageError> {
    Ok(defensive_row(graph, defender_types)?.types_where(|m| m > 1.0))
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(
    graph: &TypeGraph,
    defender_types: &[ElementalType],
) -> Result<Vec<ElementalType>, CoverageError> {
    Ok(defensive_row(graph, defender_types)?.types_where(|m| m > 0.0 && m < 1.0))
}

/// Get all types that the defender is immune to
pub fn immunities(
    graph: &TypeGraph,
    defender_types: &[ElementalType],
) -> Result<Vec<ElementalType>, CoverageError> {
    Ok(defensive_row(graph, defender_types)?.types_where(|m| m == 0.0))
}

/// Weaknesses, resistances and immunities of one type combination
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeMatchups {
    pub weaknesses: Vec<ElementalType>,
    pub resistances: Vec<ElementalType>,
    pub immunities: Vec<ElementalType>,
}

/// All three matchup lists from a single defensive row
pub fn matchups(
    graph: &TypeGraph,
    defender_types: &[ElementalType],
) -> Result<TypeMatchups, CoverageError> {
    let row = defensive_row(graph, defender_types)?;
    Ok(TypeMatchups {
        weaknesses: row.types_where(|m| m > 1.0),
        resistances: row.types_where(|m| m > 0.0 && m < 1.0),
        immunities: row.types_where(|m| m == 0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementalType::*;

    #[test]
    fn test_is_weak_to_any() {
        let graph = TypeGraph::standard();
        assert!(is_weak_to_any(&graph, &[Water], &[Electric, Grass]).unwrap());
        assert!(!is_weak_to_any(&graph, &[Water], &[Fire, Ice]).unwrap());
    }

    #[test]
    fn test_resists_all() {
        let graph = TypeGraph::standard();
        assert!(resists_all(&graph, &[Steel], &[Normal, Ice, Fairy]).unwrap());
        assert!(!resists_all(&graph, &[Steel], &[Fire, Ice]).unwrap());
        assert!(!resists_all(&graph, &[Steel], &[]).unwrap());
    }

    #[test]
    fn test_is_immune_to() {
        let graph = TypeGraph::standard();
        assert!(is_immune_to(&graph, &[Ghost], Normal).unwrap());
        assert!(is_immune_to(&graph, &[Ghost], Fighting).unwrap());
        assert!(!is_immune_to(&graph, &[Ghost], Dark).unwrap());
        assert!(is_immune_to(&graph, &[Normal], Ghost).unwrap());
        assert!(is_immune_to(&graph, &[Ground], Electric).unwrap());
    }

    #[test]
    fn test_weaknesses() {
        let graph = TypeGraph::standard();
        assert_eq!(
            weaknesses(&graph, &[Steel]).unwrap(),
            vec![Fire, Fighting, Ground]
        );
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground (Swampert) is only weak to Grass (4x)
        let graph = TypeGraph::standard();
        assert_eq!(weaknesses(&graph, &[Water, Ground]).unwrap(), vec![Grass]);
    }

    #[test]
    fn test_resistances() {
        let graph = TypeGraph::standard();
        let resists = resistances(&graph, &[Steel]).unwrap();
        assert!(resists.contains(&Normal));
        assert!(resists.contains(&Ice));
        assert!(resists.contains(&Fairy));
        assert!(!resists.contains(&Fire));
        // Poison is an immunity, not a resistance
        assert!(!resists.contains(&Poison));
    }

    #[test]
    fn test_immunities() {
        let graph = TypeGraph::standard();
        assert_eq!(immunities(&graph, &[Ghost]).unwrap(), vec![Normal, Fighting]);
    }

    #[test]
    fn test_matchups_partition() {
        let graph = TypeGraph::standard();
        let m = matchups(&graph, &[Fire, Flying]).unwrap();

        assert_eq!(m.weaknesses, vec![Water, Electric, Rock]);
        assert_eq!(m.immunities, vec![Ground]);
        assert_eq!(
            m.resistances,
            vec![Fire, Grass, Fighting, Bug, Steel, Fairy]
        );
    }

    #[test]
    fn test_invalid_defender() {
        let graph = TypeGraph::standard();
        assert_eq!(
            weaknesses(&graph, &[]),
            Err(CoverageError::InvalidTypeCount(0))
        );
    }
}
