mod tests;

mod pokemon;
mod types;

pub use pokemon::{PokemonResponse, PokemonStatSlot, PokemonTypeSlot, Sprites};
pub use types::{DamageRelationsWire, TypeResponse};

use crate::{EXCLUDED_TYPES, ParseError};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A `{ name, url }` reference to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Paginated listing returned by collection endpoints such as `/type`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<NamedResource>,
}

impl ResourceList {
    /// Names of every listed resource, in API order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }

    /// Names with the non-competitive pseudo-types filtered out
    pub fn competitive_type_names(&self) -> impl Iterator<Item = &str> {
        self.names().filter(|name| !is_excluded_type(name))
    }

    /// Whether the listing was truncated by the page limit
    pub fn is_truncated(&self) -> bool {
        self.next.is_some()
    }
}

/// Check whether a type name is one of the pseudo-types we ignore
pub fn is_excluded_type(name: &str) -> bool {
    EXCLUDED_TYPES
        .iter()
        .any(|excluded| excluded.eq_ignore_ascii_case(name))
}

/// Parse a collection listing body
pub fn parse_resource_list(body: &str) -> Result<ResourceList> {
    parse_body(body, "resource list")
}

/// Parse a `/type/{name}` body
pub fn parse_type(body: &str) -> Result<TypeResponse> {
    parse_body(body, "type")
}

/// Parse a `/pokemon/{name}` body
pub fn parse_pokemon(body: &str) -> Result<PokemonResponse> {
    let pokemon: PokemonResponse = parse_body(body, "pokemon")?;

    if pokemon.types.is_empty() {
        return Err(ParseError::MissingField(format!("types of {}", pokemon.name)).into());
    }

    Ok(pokemon)
}

fn parse_body<T: DeserializeOwned>(body: &str, what: &str) -> Result<T> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ParseError::EmptyBody.into());
    }

    serde_json::from_str(body)
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
        .with_context(|| format!("Failed to parse {} response", what))
}
