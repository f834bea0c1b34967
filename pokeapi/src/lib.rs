use thiserror::Error;

pub mod names;
pub mod resources;

pub use names::{api_slug, base_form};
pub use resources::{
    DamageRelationsWire, NamedResource, PokemonResponse, PokemonStatSlot, PokemonTypeSlot,
    ResourceList, Sprites, TypeResponse, is_excluded_type, parse_pokemon, parse_resource_list,
    parse_type,
};

/// Base URL of the public PokeAPI v2 endpoint
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Pseudo-types listed by the API that never appear in competitive play
pub const EXCLUDED_TYPES: [&str; 3] = ["stellar", "unknown", "shadow"];

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid payload: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty response body")]
    EmptyBody,
}
