//! reqwest client for the public PokeAPI

use typedex_coverage::{DamageRelations, ElementalType, SpeciesTypeProfile};
use typedex_pokeapi::{
    PokemonResponse, api_slug, base_form, parse_pokemon, parse_resource_list, parse_type,
};

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::source::{SpeciesSource, TypeSource};

/// Fetches species and type data over HTTPS
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Client for the public endpoint with default settings
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    async fn fetch_pokemon(&self, slug: &str) -> Result<PokemonResponse, FetchError> {
        let body = self.get_text(&self.url(&format!("pokemon/{slug}"))).await?;
        parse_pokemon(&body).map_err(|e| FetchError::Decode(format!("{e:#}")))
    }
}

impl SpeciesSource for PokeApiClient {
    /// Looks up the normalised slug, falling back once to the base form
    async fn fetch_species(&self, name: &str) -> Result<SpeciesTypeProfile, FetchError> {
        let slug = api_slug(name);

        let pokemon = match self.fetch_pokemon(&slug).await {
            Err(FetchError::NotFound(_)) => {
                let base = base_form(name);
                if base == slug {
                    return Err(FetchError::NotFound(name.to_string()));
                }
                tracing::debug!(name = name, slug = %slug, base = %base, "Retrying with base form");
                self.fetch_pokemon(&base).await.map_err(|e| match e {
                    FetchError::NotFound(_) => FetchError::NotFound(name.to_string()),
                    other => other,
                })?
            }
            other => other?,
        };

        SpeciesTypeProfile::from_wire(&pokemon).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl TypeSource for PokeApiClient {
    async fn list_types(&self) -> Result<Vec<ElementalType>, FetchError> {
        let body = self.get_text(&self.url("type?limit=100")).await?;
        let list = parse_resource_list(&body).map_err(|e| FetchError::Decode(format!("{e:#}")))?;

        if list.is_truncated() {
            tracing::warn!(count = ?list.count, "Type list is paginated, later pages ignored");
        }

        let mut types = Vec::with_capacity(ElementalType::COUNT);
        for name in list.competitive_type_names() {
            match name.parse::<ElementalType>() {
                Ok(t) => types.push(t),
                Err(e) => tracing::warn!(name = name, error = %e, "Skipping unrecognised type"),
            }
        }
        Ok(types)
    }

    async fn fetch_type_relations(&self, t: ElementalType) -> Result<DamageRelations, FetchError> {
        let body = self.get_text(&self.url(&format!("type/{}", t.as_str()))).await?;
        let wire = parse_type(&body).map_err(|e| FetchError::Decode(format!("{e:#}")))?;
        DamageRelations::from_wire(t, &wire.damage_relations)
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
