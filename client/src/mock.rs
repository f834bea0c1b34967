//! In-memory source for tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use typedex_coverage::{BaseStats, DamageRelations, ElementalType, SpeciesTypeProfile};
use typedex_pokeapi::api_slug;

use crate::error::FetchError;
use crate::source::{SpeciesSource, TypeSource};

#[derive(Debug, Default)]
pub struct MockSource {
    species: HashMap<String, SpeciesTypeProfile>,
    failing_species: HashSet<String>,
    failing_types: HashSet<ElementalType>,
    missing_types: HashSet<ElementalType>,
    types_down: AtomicBool,
    delay: Duration,
    species_calls: AtomicUsize,
    type_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// charizard, blastoise, venusaur and pikachu
    pub fn kanto() -> Self {
        use typedex_coverage::ElementalType::*;
        Self::new()
            .with_species("charizard", &[Fire, Flying], [78, 84, 78, 109, 85, 100])
            .with_species("blastoise", &[Water], [79, 83, 100, 85, 105, 78])
            .with_species("venusaur", &[Grass, Poison], [80, 82, 83, 100, 100, 80])
            .with_species("pikachu", &[Electric], [35, 55, 40, 50, 50, 90])
    }

    pub fn with_species(mut self, name: &str, types: &[ElementalType], stats: [u16; 6]) -> Self {
        let [hp, attack, defense, special_attack, special_defense, speed] = stats;
        let stats = BaseStats {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        };
        let profile = SpeciesTypeProfile::new(name, types.to_vec(), "", stats)
            .unwrap_or_else(|e| panic!("bad mock species {name}: {e}"));
        self.species.insert(name.to_string(), profile);
        self
    }

    /// `mon-0` .. `mon-{count - 1}`, all Normal type
    pub fn with_generated(mut self, count: usize) -> Self {
        for i in 0..count {
            self = self.with_species(&format!("mon-{i}"), &[ElementalType::Normal], [50; 6]);
        }
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing_species(mut self, name: &str) -> Self {
        self.failing_species.insert(name.to_string());
        self
    }

    pub fn failing_type(mut self, t: ElementalType) -> Self {
        self.failing_types.insert(t);
        self
    }

    pub fn without_type(mut self, t: ElementalType) -> Self {
        self.missing_types.insert(t);
        self
    }

    /// Make every type request fail until switched back
    pub fn set_types_down(&self, down: bool) {
        self.types_down.store(down, Ordering::SeqCst);
    }

    pub fn species_calls(&self) -> usize {
        self.species_calls.load(Ordering::SeqCst)
    }

    pub fn type_calls(&self) -> usize {
        self.type_calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl SpeciesSource for MockSource {
    async fn fetch_species(&self, name: &str) -> Result<SpeciesTypeProfile, FetchError> {
        self.species_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let slug = api_slug(name);
        if self.failing_species.contains(&slug) {
            return Err(FetchError::Http {
                status: 500,
                url: format!("mock://pokemon/{slug}"),
            });
        }
        self.species
            .get(&slug)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(name.to_string()))
    }
}

impl TypeSource for MockSource {
    async fn list_types(&self) -> Result<Vec<ElementalType>, FetchError> {
        if self.types_down.load(Ordering::SeqCst) {
            return Err(FetchError::Transport("type list unavailable".to_string()));
        }
        Ok(ElementalType::ALL
            .iter()
            .copied()
            .filter(|t| !self.missing_types.contains(t))
            .collect())
    }

    async fn fetch_type_relations(&self, t: ElementalType) -> Result<DamageRelations, FetchError> {
        self.type_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_types.contains(&t) {
            return Err(FetchError::Transport(format!("type {t} unavailable")));
        }
        Ok(DamageRelations::from_chart(t))
    }
}
