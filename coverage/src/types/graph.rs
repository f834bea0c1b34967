//! The complete damage-relation graph

use std::collections::HashMap;

use super::{DamageRelations, ElementalType};
use crate::CoverageError;

/// Damage relations for all 18 types
///
/// A graph can only be constructed complete, and is never mutated afterwards,
/// so it can be shared behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGraph {
    relations: HashMap<ElementalType, DamageRelations>,
}

impl TypeGraph {
    /// Build a graph, rejecting it unless every type has relations
    pub fn from_relations<I>(relations: I) -> Result<Self, CoverageError>
    where
        I: IntoIterator<Item = (ElementalType, DamageRelations)>,
    {
        let mut map = HashMap::with_capacity(ElementalType::COUNT);
        for (owner, rel) in relations {
            rel.validate(owner)?;
            map.insert(owner, rel);
        }

        let missing: Vec<ElementalType> = ElementalType::ALL
            .iter()
            .copied()
            .filter(|t| !map.contains_key(t))
            .collect();
        if !missing.is_empty() {
            return Err(CoverageError::IncompleteGraph { missing });
        }

        Ok(Self { relations: map })
    }

    /// The Gen 6+ graph built from [`super::TYPE_CHART`]
    pub fn standard() -> Self {
        Self {
            relations: ElementalType::ALL
                .iter()
                .map(|t| (*t, DamageRelations::from_chart(*t)))
                .collect(),
        }
    }

    /// Relations of a single type
    pub fn relations_of(&self, t: ElementalType) -> Result<&DamageRelations, CoverageError> {
        self.relations.get(&t).ok_or(CoverageError::UnknownType(t))
    }

    /// Multiplier of an `attacker` move against a single `defender` type,
    /// read from the defender's side of the graph
    pub fn multiplier(
        &self,
        attacker: ElementalType,
        defender: ElementalType,
    ) -> Result<f32, CoverageError> {
        Ok(self.relations_of(defender)?.taken_from(attacker))
    }

    /// Pairs `(attacker, defender)` where the attacker's `*_to` sets disagree
    /// with the defender's `*_from` sets
    pub fn asymmetries(&self) -> Vec<(ElementalType, ElementalType)> {
        let mut found = Vec::new();
        for (attacker, atk) in &self.relations {
            for (defender, def) in &self.relations {
                if atk.dealt_to(*defender) != def.taken_from(*attacker) {
                    found.push((*attacker, *defender));
                }
            }
        }
        found.sort();
        found
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TYPE_CHART;

    #[test]
    fn test_standard_graph_matches_chart() {
        let graph = TypeGraph::standard();
        assert_eq!(graph.len(), 18);

        for attacker in ElementalType::ALL {
            for defender in ElementalType::ALL {
                assert_eq!(
                    graph.multiplier(attacker, defender).unwrap(),
                    TYPE_CHART[attacker.index()][defender.index()],
                    "{attacker} vs {defender}"
                );
            }
        }
    }

    #[test]
    fn test_standard_graph_is_symmetric() {
        assert!(TypeGraph::standard().asymmetries().is_empty());
    }

    #[test]
    fn test_double_from_reads_as_two() {
        let graph = TypeGraph::standard();
        for owner in ElementalType::ALL {
            let rel = graph.relations_of(owner).unwrap();
            for attacker in rel.double_from.iter() {
                assert_eq!(graph.multiplier(attacker, owner).unwrap(), 2.0);
            }
        }
    }

    #[test]
    fn test_incomplete_graph_rejected() {
        let partial = ElementalType::ALL
            .iter()
            .filter(|t| **t != ElementalType::Fairy && **t != ElementalType::Dark)
            .map(|t| (*t, DamageRelations::from_chart(*t)));

        assert_eq!(
            TypeGraph::from_relations(partial),
            Err(CoverageError::IncompleteGraph {
                missing: vec![ElementalType::Dark, ElementalType::Fairy]
            })
        );
    }

    #[test]
    fn test_from_relations_complete() {
        let all = ElementalType::ALL
            .iter()
            .map(|t| (*t, DamageRelations::from_chart(*t)));

        assert_eq!(TypeGraph::from_relations(all).unwrap(), TypeGraph::standard());
    }

    #[test]
    fn test_asymmetry_detected() {
        let mut all: Vec<_> = ElementalType::ALL
            .iter()
            .map(|t| (*t, DamageRelations::from_chart(*t)))
            .collect();
        // Fire claims it no longer hits Grass hard; Grass still lists Fire as 2x
        all[ElementalType::Fire.index()].1.double_to = Default::default();

        let graph = TypeGraph::from_relations(all).unwrap();
        assert!(
            graph
                .asymmetries()
                .contains(&(ElementalType::Fire, ElementalType::Grass))
        );
    }
}
