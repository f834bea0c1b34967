//! Client and cache configuration

use std::time::Duration;

use typedex_coverage::AggregateOptions;
use typedex_pokeapi::POKEAPI_URL;

use crate::{CACHE_EXPIRATION, MAX_CONCURRENT_REQUESTS};

/// What a lookup returns when refreshing an expired entry fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Surface the fetch error
    #[default]
    Reject,
    /// Return the expired value, tagged as stale
    ServeStale,
}

/// Fetch cache tunables
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long an entry stays valid after it was fetched
    pub ttl: Duration,
    /// Upper bound on fetches in flight across the whole cache
    pub max_concurrent_requests: usize,
    pub stale_policy: StalePolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: CACHE_EXPIRATION,
            max_concurrent_requests: MAX_CONCURRENT_REQUESTS,
            stale_policy: StalePolicy::Reject,
        }
    }
}

/// Settings for [`crate::PokeApiClient`] and [`crate::TypedexClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub cache: CacheConfig,
    pub aggregate: AggregateOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            user_agent: concat!("typedex/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            cache: CacheConfig::default(),
            aggregate: AggregateOptions::default(),
        }
    }
}

impl ClientConfig {
    /// Point the client at another PokeAPI-compatible server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }
}
