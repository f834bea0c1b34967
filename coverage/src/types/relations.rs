//! Damage relations of a single type

use typedex_pokeapi::{DamageRelationsWire, NamedResource, is_excluded_type};

use super::ElementalType;
use crate::CoverageError;

/// A set of elemental types, stored as an 18-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeSet(u32);

impl TypeSet {
    pub const EMPTY: TypeSet = TypeSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, t: ElementalType) -> bool {
        let had = self.contains(t);
        self.0 |= 1 << t.index();
        !had
    }

    pub fn contains(&self, t: ElementalType) -> bool {
        self.0 & (1 << t.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn intersection(&self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 & other.0)
    }

    pub fn union(&self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 | other.0)
    }

    /// Members in chart order
    pub fn iter(&self) -> impl Iterator<Item = ElementalType> + '_ {
        ElementalType::ALL
            .iter()
            .copied()
            .filter(move |t| self.contains(*t))
    }
}

impl FromIterator<ElementalType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = ElementalType>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        for t in iter {
            set.insert(t);
        }
        set
    }
}

/// How one type deals and receives damage
///
/// `*_from` sets hold attacking types, `*_to` sets hold defending types.
/// Within one direction a type appears in at most one set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageRelations {
    pub double_from: TypeSet,
    pub double_to: TypeSet,
    pub half_from: TypeSet,
    pub half_to: TypeSet,
    pub no_from: TypeSet,
    pub no_to: TypeSet,
}

impl DamageRelations {
    /// Multiplier this type takes from an `attacker` move
    pub fn taken_from(&self, attacker: ElementalType) -> f32 {
        if self.no_from.contains(attacker) {
            0.0
        } else if self.double_from.contains(attacker) {
            2.0
        } else if self.half_from.contains(attacker) {
            0.5
        } else {
            1.0
        }
    }

    /// Multiplier a move of this type deals to a `defender`
    pub fn dealt_to(&self, defender: ElementalType) -> f32 {
        if self.no_to.contains(defender) {
            0.0
        } else if self.double_to.contains(defender) {
            2.0
        } else if self.half_to.contains(defender) {
            0.5
        } else {
            1.0
        }
    }

    /// Check that no type sits in two strength sets of the same direction
    pub fn validate(&self, owner: ElementalType) -> Result<(), CoverageError> {
        let directions = [
            ("from", [self.double_from, self.half_from, self.no_from]),
            ("to", [self.double_to, self.half_to, self.no_to]),
        ];

        for (direction, [double, half, none]) in directions {
            let overlap = double
                .intersection(half)
                .union(double.intersection(none))
                .union(half.intersection(none));
            if let Some(other) = overlap.iter().next() {
                return Err(CoverageError::ConflictingRelation {
                    owner,
                    other,
                    direction,
                });
            }
        }

        Ok(())
    }

    /// Relations of `owner` as read from row and column of [`super::TYPE_CHART`]
    pub fn from_chart(owner: ElementalType) -> Self {
        let mut relations = Self::default();

        for other in ElementalType::ALL {
            match other.chart_effectiveness(owner) {
                m if m == 0.0 => relations.no_from.insert(other),
                m if m == 2.0 => relations.double_from.insert(other),
                m if m == 0.5 => relations.half_from.insert(other),
                _ => false,
            };
            match owner.chart_effectiveness(other) {
                m if m == 0.0 => relations.no_to.insert(other),
                m if m == 2.0 => relations.double_to.insert(other),
                m if m == 0.5 => relations.half_to.insert(other),
                _ => false,
            };
        }

        relations
    }

    /// Convert the API representation, skipping pseudo-types
    pub fn from_wire(owner: ElementalType, wire: &DamageRelationsWire) -> Result<Self, CoverageError> {
        let relations = Self {
            double_from: parse_set(&wire.double_damage_from)?,
            double_to: parse_set(&wire.double_damage_to)?,
            half_from: parse_set(&wire.half_damage_from)?,
            half_to: parse_set(&wire.half_damage_to)?,
            no_from: parse_set(&wire.no_damage_from)?,
            no_to: parse_set(&wire.no_damage_to)?,
        };
        relations.validate(owner)?;
        Ok(relations)
    }
}

fn parse_set(resources: &[NamedResource]) -> Result<TypeSet, CoverageError> {
    resources
        .iter()
        .filter(|r| !is_excluded_type(&r.name))
        .map(|r| r.name.parse::<ElementalType>())
        .collect()
}
