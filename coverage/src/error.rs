use thiserror::Error;

use crate::types::ElementalType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoverageError {
    #[error("Type {0} is not present in the type graph")]
    UnknownType(ElementalType),

    #[error("Unrecognised type name: {0}")]
    UnrecognisedType(String),

    #[error("Type graph is missing relations for: {}", join_types(.missing))]
    IncompleteGraph { missing: Vec<ElementalType> },

    #[error("{owner} lists {other} in more than one {direction} relation")]
    ConflictingRelation {
        owner: ElementalType,
        other: ElementalType,
        direction: &'static str,
    },

    #[error("A species must have one or two types, got {0}")]
    InvalidTypeCount(usize),

    #[error("Type {0} is listed twice")]
    DuplicateType(ElementalType),

    #[error("Missing base stat: {0}")]
    MissingStat(String),

    #[error("Cannot aggregate an empty roster")]
    EmptyRoster,
}

fn join_types(types: &[ElementalType]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
