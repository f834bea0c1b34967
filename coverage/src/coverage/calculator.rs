use super::EffectivenessRow;
use crate::CoverageError;
use crate::types::{DamageRelations, ElementalType, TypeGraph};

/// Damage a species with `types` takes from each attacking type
///
/// The per-type multipliers are multiplied together, so two 2x weaknesses
/// make 4x and any immunity makes the result 0.
pub fn defensive_row(
    graph: &TypeGraph,
    types: &[ElementalType],
) -> Result<EffectivenessRow, CoverageError> {
    let own = own_relations(graph, types)?;
    Ok(EffectivenessRow::from_fn(|attacker| {
        own.iter().map(|rel| rel.taken_from(attacker)).product()
    }))
}

/// Damage a species with `types` can deal to each defending type
///
/// A species picks whichever of its own types hits hardest, so this is the
/// maximum over its types, never a product.
pub fn offensive_row(
    graph: &TypeGraph,
    types: &[ElementalType],
) -> Result<EffectivenessRow, CoverageError> {
    let own = own_relations(graph, types)?;
    Ok(EffectivenessRow::from_fn(|defender| {
        own.iter()
            .map(|rel| rel.dealt_to(defender))
            .fold(0.0, f32::max)
    }))
}

/// Single entry of [`defensive_row`]
pub fn defensive_multiplier(
    graph: &TypeGraph,
    types: &[ElementalType],
    attacker: ElementalType,
) -> Result<f32, CoverageError> {
    Ok(own_relations(graph, types)?
        .iter()
        .map(|rel| rel.taken_from(attacker))
        .product())
}

/// Single entry of [`offensive_row`]
pub fn offensive_multiplier(
    graph: &TypeGraph,
    types: &[ElementalType],
    defender: ElementalType,
) -> Result<f32, CoverageError> {
    Ok(own_relations(graph, types)?
        .iter()
        .map(|rel| rel.dealt_to(defender))
        .fold(0.0, f32::max))
}

fn own_relations<'g>(
    graph: &'g TypeGraph,
    types: &[ElementalType],
) -> Result<Vec<&'g DamageRelations>, CoverageError> {
    if types.is_empty() || types.len() > 2 {
        return Err(CoverageError::InvalidTypeCount(types.len()));
    }
    types.iter().map(|t| graph.relations_of(*t)).collect()
}
