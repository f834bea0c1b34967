//! `/type/{name}` resource
//!
//! Only the damage relations are modelled; the species and move listings
//! attached to each type are skipped during deserialization.

use super::NamedResource;
use serde::Deserialize;

/// A single elemental type and how it interacts with the others
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeResponse {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub damage_relations: DamageRelationsWire,
}

/// Six relation lists, each naming the other types involved
///
/// `*_from` lists describe attacks this type receives, `*_to` lists describe
/// attacks this type deals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DamageRelationsWire {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

impl DamageRelationsWire {
    /// Total number of named relations across all six lists
    pub fn len(&self) -> usize {
        self.double_damage_from.len()
            + self.double_damage_to.len()
            + self.half_damage_from.len()
            + self.half_damage_to.len()
            + self.no_damage_from.len()
            + self.no_damage_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
