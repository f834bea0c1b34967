//! Per-species type and stat profile

use typedex_pokeapi::PokemonResponse;

use super::ElementalType;
use crate::CoverageError;

/// The six base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Position in [`Stat::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Name used by the API's stats list
    pub fn api_name(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special-attack",
            Stat::SpecialDefense => "special-defense",
            Stat::Speed => "speed",
        }
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Sp. Attack",
            Stat::SpecialDefense => "Sp. Defense",
            Stat::Speed => "Speed",
        }
    }
}

/// Base stat block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    /// Get a single stat
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set a single stat
    pub fn set(&mut self, stat: Stat, value: u16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Base stat total
    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|s| u32::from(self.get(*s))).sum()
    }

    /// Read all six stats from an API record
    pub fn from_wire(pokemon: &PokemonResponse) -> Result<Self, CoverageError> {
        let mut stats = Self::default();
        for stat in Stat::ALL {
            let value = pokemon
                .base_stat(stat.api_name())
                .ok_or_else(|| CoverageError::MissingStat(stat.api_name().to_string()))?;
            stats.set(stat, value);
        }
        Ok(stats)
    }
}

/// A species' types, sprite and base stats
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProfile"))]
pub struct SpeciesTypeProfile {
    pub name: String,
    types: Vec<ElementalType>,
    pub sprite: String,
    pub stats: BaseStats,
}

/// Deserialized form, checked by [`SpeciesTypeProfile::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProfile {
    name: String,
    types: Vec<ElementalType>,
    sprite: String,
    stats: BaseStats,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProfile> for SpeciesTypeProfile {
    type Error = CoverageError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.types, raw.sprite, raw.stats)
    }
}

impl SpeciesTypeProfile {
    /// Create a profile with one or two distinct types
    pub fn new(
        name: impl Into<String>,
        types: Vec<ElementalType>,
        sprite: impl Into<String>,
        stats: BaseStats,
    ) -> Result<Self, CoverageError> {
        if types.is_empty() || types.len() > 2 {
            return Err(CoverageError::InvalidTypeCount(types.len()));
        }
        if types.len() == 2 && types[0] == types[1] {
            return Err(CoverageError::DuplicateType(types[0]));
        }

        Ok(Self {
            name: name.into(),
            types,
            sprite: sprite.into(),
            stats,
        })
    }

    /// Build a profile from an API record
    ///
    /// Pseudo-types in the record are skipped; any other unknown type name
    /// is an error.
    pub fn from_wire(pokemon: &PokemonResponse) -> Result<Self, CoverageError> {
        let types = pokemon
            .type_names()
            .into_iter()
            .filter(|name| !typedex_pokeapi::is_excluded_type(name))
            .map(|name| name.parse::<ElementalType>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(
            pokemon.name.clone(),
            types,
            pokemon.sprite(),
            BaseStats::from_wire(pokemon)?,
        )
    }

    /// Types in slot order
    pub fn types(&self) -> &[ElementalType] {
        &self.types
    }

    pub fn has_type(&self, t: ElementalType) -> bool {
        self.types.contains(&t)
    }

    /// Types joined for display, e.g. `fire/flying`
    pub fn type_label(&self) -> String {
        self.types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}
