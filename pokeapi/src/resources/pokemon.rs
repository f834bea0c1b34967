//! `/pokemon/{name}` resource

use super::NamedResource;
use serde::Deserialize;

/// The subset of a species record needed for coverage analysis
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonResponse {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl PokemonResponse {
    /// Type names ordered by slot (primary type first)
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.kind.name.as_str()).collect()
    }

    /// Look up a base stat by its API name (`hp`, `special-attack`, ...)
    pub fn base_stat(&self, stat: &str) -> Option<u16> {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat)
            .map(|s| s.base_stat)
    }

    /// Front sprite URL, or an empty string when the API has none
    pub fn sprite(&self) -> &str {
        self.sprites.front_default.as_deref().unwrap_or("")
    }
}

/// `{ slot, type }` entry of the types list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// `{ base_stat, effort, stat }` entry of the stats list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStatSlot {
    pub base_stat: u16,
    #[serde(default)]
    pub effort: u8,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}
