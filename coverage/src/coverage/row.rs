use std::ops::Index;

use crate::types::ElementalType;

/// Every multiplier a one- or two-type matchup can produce
pub const MULTIPLIERS: [f32; 6] = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];

pub fn is_valid_multiplier(value: f32) -> bool {
    MULTIPLIERS.contains(&value)
}

/// One multiplier per elemental type, in chart order
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessRow([f32; 18]);

impl EffectivenessRow {
    /// A row with every entry set to `value`
    pub fn splat(value: f32) -> Self {
        Self([value; 18])
    }

    /// Build a row by evaluating `f` for each type
    pub fn from_fn(mut f: impl FnMut(ElementalType) -> f32) -> Self {
        let mut values = [0.0; 18];
        for t in ElementalType::ALL {
            values[t.index()] = f(t);
        }
        Self(values)
    }

    pub fn get(&self, t: ElementalType) -> f32 {
        self.0[t.index()]
    }

    pub fn values(&self) -> &[f32; 18] {
        &self.0
    }

    /// `(type, multiplier)` pairs in chart order
    pub fn iter(&self) -> impl Iterator<Item = (ElementalType, f32)> + '_ {
        ElementalType::ALL.iter().map(|t| (*t, self.get(*t)))
    }

    /// Types whose multiplier satisfies `pred`, in chart order
    pub fn types_where(&self, pred: impl Fn(f32) -> bool) -> Vec<ElementalType> {
        self.iter()
            .filter(|(_, m)| pred(*m))
            .map(|(t, _)| t)
            .collect()
    }

    /// Elementwise combination of two rows
    pub fn zip_with(&self, other: &EffectivenessRow, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::from_fn(|t| f(self.get(t), other.get(t)))
    }
}

impl Index<ElementalType> for EffectivenessRow {
    type Output = f32;

    fn index(&self, t: ElementalType) -> &f32 {
        &self.0[t.index()]
    }
}

impl From<[f32; 18]> for EffectivenessRow {
    fn from(values: [f32; 18]) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splat_and_index() {
        let row = EffectivenessRow::splat(1.0);
        assert_eq!(row[ElementalType::Dragon], 1.0);
        assert!(row.types_where(|m| m != 1.0).is_empty());
    }

    #[test]
    fn test_types_where_keeps_chart_order() {
        let row = EffectivenessRow::from_fn(|t| match t {
            ElementalType::Rock | ElementalType::Fire => 2.0,
            _ => 1.0,
        });
        assert_eq!(
            row.types_where(|m| m > 1.0),
            vec![ElementalType::Fire, ElementalType::Rock]
        );
    }

    #[test]
    fn test_zip_with() {
        let a = EffectivenessRow::splat(0.5);
        let b = EffectivenessRow::from_fn(|t| if t == ElementalType::Ice { 4.0 } else { 0.25 });
        let max = a.zip_with(&b, f32::max);

        assert_eq!(max[ElementalType::Ice], 4.0);
        assert_eq!(max[ElementalType::Fire], 0.5);
    }

    #[test]
    fn test_valid_multipliers() {
        assert!(is_valid_multiplier(0.25));
        assert!(is_valid_multiplier(4.0));
        assert!(!is_valid_multiplier(8.0));
        assert!(!is_valid_multiplier(0.125));
    }
}
