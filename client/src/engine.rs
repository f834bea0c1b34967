//! Roster resolution and team analysis on top of the cache

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use typedex_coverage::{
    AggregateOptions, ElementalType, SpeciesTypeProfile, SpeedEntry, StatComparison,
    TeamCoverageReport, TeamStats, TypeGraph, TypeMatchups, aggregate, compare, compare_stats,
    matchups, speed_ranking,
};
use typedex_pokeapi::api_slug;

use crate::cache::{FetchCache, Resolved};
use crate::config::{CacheConfig, ClientConfig};
use crate::error::{AnalysisError, FailedMember, FetchError, GraphError, PartialFailure};
use crate::graph::load_type_graph;
use crate::pokeapi::PokeApiClient;
use crate::source::{SpeciesSource, TypeSource};

/// Base stat side of a two-team analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub team1: TeamStats,
    pub team2: TeamStats,
    /// Average of each stat, team 1 against team 2
    pub comparison: Vec<StatComparison>,
    pub speed_ranking: Vec<SpeedEntry>,
}

/// Result of [`TypedexClient::analyze_teams`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalysis {
    pub report1: TeamCoverageReport,
    pub report2: TeamCoverageReport,
    pub stats: StatsSummary,
}

/// Resolves rosters through a shared species cache and analyses them
/// against a lazily loaded type graph
///
/// Clones share the cache, the graph and the source.
pub struct TypedexClient<S = PokeApiClient> {
    source: Arc<S>,
    species: FetchCache<String, SpeciesTypeProfile>,
    graph: Arc<OnceCell<Arc<TypeGraph>>>,
    options: AggregateOptions,
}

impl<S> Clone for TypedexClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            species: self.species.clone(),
            graph: Arc::clone(&self.graph),
            options: self.options,
        }
    }
}

impl TypedexClient<PokeApiClient> {
    /// Client for the public PokeAPI with default settings
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, FetchError> {
        let source = PokeApiClient::with_config(&config)?;
        Ok(Self::with_source(source, config.cache, config.aggregate))
    }
}

impl<S> TypedexClient<S>
where
    S: SpeciesSource + TypeSource + 'static,
{
    pub fn with_source(source: S, cache: CacheConfig, options: AggregateOptions) -> Self {
        Self::with_cache(source, FetchCache::new(cache), options)
    }

    /// Use an existing cache, e.g. one restored from a snapshot
    pub fn with_cache(
        source: S,
        species: FetchCache<String, SpeciesTypeProfile>,
        options: AggregateOptions,
    ) -> Self {
        Self {
            source: Arc::new(source),
            species,
            graph: Arc::new(OnceCell::new()),
            options,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &FetchCache<String, SpeciesTypeProfile> {
        &self.species
    }

    /// The type graph, loaded on first use
    ///
    /// A failed load is not remembered; the next call tries again.
    pub async fn type_graph(&self) -> Result<Arc<TypeGraph>, GraphError> {
        self.graph
            .get_or_try_init(|| async {
                load_type_graph(self.source.as_ref()).await.map(Arc::new)
            })
            .await
            .cloned()
    }

    /// One species, cached under its API slug
    pub async fn get_species(
        &self,
        name: &str,
    ) -> Result<Resolved<SpeciesTypeProfile>, FetchError> {
        let source = Arc::clone(&self.source);
        let requested = name.to_string();
        self.species
            .get_or_fetch(api_slug(name), move || async move {
                source.fetch_species(&requested).await
            })
            .await
    }

    /// Resolve every name, failing if any member could not be resolved
    ///
    /// Members are fetched concurrently and returned in input order.
    pub async fn get_roster<N: AsRef<str>>(
        &self,
        names: &[N],
    ) -> Result<Vec<SpeciesTypeProfile>, PartialFailure> {
        self.get_roster_with_progress(names, |_, _| {}).await
    }

    /// [`get_roster`](Self::get_roster), calling `on_progress(done, total)`
    /// each time a member resolves or fails
    pub async fn get_roster_with_progress<N, F>(
        &self,
        names: &[N],
        on_progress: F,
    ) -> Result<Vec<SpeciesTypeProfile>, PartialFailure>
    where
        N: AsRef<str>,
        F: Fn(usize, usize) + Send + Sync,
    {
        let total = names.len();
        let done = AtomicUsize::new(0);
        let results = join_all(names.iter().map(|n| async {
            let result = self.get_species(n.as_ref()).await;
            on_progress(done.fetch_add(1, Ordering::SeqCst) + 1, total);
            result
        }))
        .await;

        let mut resolved = Vec::with_capacity(names.len());
        let mut failed = Vec::new();
        for (name, result) in names.iter().zip(results) {
            match result {
                Ok(r) => resolved.push(r.value),
                Err(error) => failed.push(FailedMember {
                    name: name.as_ref().to_string(),
                    error,
                }),
            }
        }

        if failed.is_empty() {
            Ok(resolved)
        } else {
            let failure = PartialFailure { resolved, failed };
            tracing::warn!(
                resolved = failure.resolved.len(),
                failed = ?failure.failed_names(),
                "Roster only partially resolved"
            );
            Err(failure)
        }
    }

    /// Coverage report for one roster
    pub async fn analyze_team<N: AsRef<str>>(
        &self,
        names: &[N],
    ) -> Result<TeamCoverageReport, AnalysisError> {
        let (graph, roster) = tokio::join!(self.type_graph(), self.get_roster(names));
        let roster = roster.map_err(|failure| AnalysisError::Roster { team: 1, failure })?;
        let graph = graph?;
        Ok(aggregate(&graph, &roster, &self.options)?)
    }

    /// Independent coverage reports and a stat comparison for two rosters
    pub async fn analyze_teams<N: AsRef<str>>(
        &self,
        team1: &[N],
        team2: &[N],
    ) -> Result<TeamAnalysis, AnalysisError> {
        let (graph, roster1, roster2) = tokio::join!(
            self.type_graph(),
            self.get_roster(team1),
            self.get_roster(team2)
        );
        let roster1 = roster1.map_err(|failure| AnalysisError::Roster { team: 1, failure })?;
        let roster2 = roster2.map_err(|failure| AnalysisError::Roster { team: 2, failure })?;
        let graph = graph?;

        let (report1, report2) = compare(&graph, &roster1, &roster2, &self.options)?;

        let stats1 = TeamStats::new(&roster1);
        let stats2 = TeamStats::new(&roster2);
        let stats = StatsSummary {
            comparison: compare_stats(&stats1, &stats2),
            speed_ranking: speed_ranking(&roster1, &roster2),
            team1: stats1,
            team2: stats2,
        };

        tracing::debug!(
            team1 = roster1.len(),
            team2 = roster2.len(),
            cache = ?self.species.stats(),
            "Analysed teams"
        );

        Ok(TeamAnalysis {
            report1,
            report2,
            stats,
        })
    }

    /// Weaknesses, resistances and immunities of a type combination
    pub async fn matchups(&self, types: &[ElementalType]) -> Result<TypeMatchups, AnalysisError> {
        let graph = self.type_graph().await?;
        Ok(matchups(&graph, types)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use typedex_coverage::CoverageError;
    use typedex_coverage::ElementalType::*;

    use super::*;
    use crate::cache::Source;
    use crate::mock::MockSource;

    fn client(source: MockSource) -> TypedexClient<MockSource> {
        TypedexClient::with_source(source, CacheConfig::default(), AggregateOptions::default())
    }

    #[tokio::test]
    async fn test_roster_in_input_order() {
        let client = client(MockSource::kanto());
        let roster = client
            .get_roster(&["Venusaur", "charizard", "Blastoise"])
            .await
            .unwrap();

        let names: Vec<&str> = roster.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["venusaur", "charizard", "blastoise"]);
    }

    #[tokio::test]
    async fn test_not_found_reported_with_resolved_members() {
        let client = client(MockSource::kanto());
        let failure = client
            .get_roster(&["charizard", "missingno", "pikachu"])
            .await
            .unwrap_err();

        assert_eq!(failure.failed_names(), vec!["missingno"]);
        assert_eq!(
            failure.failed[0].error,
            FetchError::NotFound("missingno".to_string())
        );
        let resolved: Vec<&str> = failure.resolved.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(resolved, vec!["charizard", "pikachu"]);
    }

    #[tokio::test]
    async fn test_roster_progress_counts_every_member() {
        let client = client(MockSource::kanto());
        let calls = std::sync::Mutex::new(Vec::new());
        let failure = client
            .get_roster_with_progress(&["charizard", "missingno", "pikachu"], |done, total| {
                calls.lock().unwrap().push((done, total));
            })
            .await
            .unwrap_err();

        assert_eq!(failure.failed_names(), vec!["missingno"]);
        assert_eq!(calls.into_inner().unwrap(), vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test]
    async fn test_species_cached_by_slug() {
        let client = client(MockSource::kanto());

        let first = client.get_species("Charizard").await.unwrap();
        let second = client.get_species(" charizard ").await.unwrap();

        assert_eq!(first.source, Source::Fetch);
        assert_eq!(second.source, Source::Cache);
        assert_eq!(client.source().species_calls(), 1);
    }

    #[tokio::test]
    async fn test_analyze_teams_reference_roster() {
        let client = client(MockSource::kanto());
        let analysis = client
            .analyze_teams(&["charizard", "blastoise", "venusaur"], &["pikachu", "charizard"])
            .await
            .unwrap();

        assert_eq!(analysis.report1.shared_weaknesses, vec![Electric]);
        assert!(analysis.report1.uncovered.is_empty());
        assert_eq!(analysis.report1.weakness_count(Electric), 2);
        assert_eq!(analysis.report2.members.len(), 2);

        assert_eq!(analysis.stats.team1.size, 3);
        assert_eq!(analysis.stats.comparison.len(), 6);
        assert_eq!(analysis.stats.speed_ranking.len(), 5);
        assert_eq!(analysis.stats.speed_ranking[0].speed, 100);

        // charizard was fetched once and shared between both teams
        assert_eq!(client.source().species_calls(), 4);
    }

    #[tokio::test]
    async fn test_repeat_analysis_uses_cache() {
        let client = client(MockSource::kanto());
        let team = ["charizard", "blastoise"];

        client.analyze_team(&team).await.unwrap();
        client.analyze_team(&team).await.unwrap();

        assert_eq!(client.source().species_calls(), 2);
        assert_eq!(client.source().type_calls(), 18);
    }

    #[tokio::test]
    async fn test_failed_member_blocks_report() {
        let client = client(MockSource::kanto().failing_species("pikachu"));
        let err = client
            .analyze_teams(&["charizard"], &["pikachu", "blastoise"])
            .await
            .unwrap_err();

        match err {
            AnalysisError::Roster { team, failure } => {
                assert_eq!(team, 2);
                assert_eq!(failure.failed_names(), vec!["pikachu"]);
                assert_eq!(failure.resolved.len(), 1);
            }
            other => panic!("expected roster failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_roster_rejected() {
        let client = client(MockSource::kanto());
        let err = client.analyze_team::<&str>(&[]).await.unwrap_err();
        assert_eq!(err, AnalysisError::Coverage(CoverageError::EmptyRoster));
    }

    #[tokio::test]
    async fn test_failed_graph_load_is_retried() {
        let client = client(MockSource::kanto());
        client.source().set_types_down(true);

        let err = client.analyze_team(&["pikachu"]).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Graph(GraphError::Fetch(_))));

        client.source().set_types_down(false);
        let report = client.analyze_team(&["pikachu"]).await.unwrap();
        assert_eq!(report.shared_weaknesses, vec![Ground]);
        // the roster was cached by the first, failed analysis
        assert_eq!(client.source().species_calls(), 1);
    }

    #[tokio::test]
    async fn test_large_roster_respects_request_limit() {
        let source = MockSource::new()
            .with_generated(250)
            .with_delay(Duration::from_millis(5));
        let client = client(source);
        let names: Vec<String> = (0..250).map(|i| format!("mon-{i}")).collect();

        let roster = client.get_roster(&names).await.unwrap();

        assert_eq!(roster.len(), 250);
        assert_eq!(client.source().species_calls(), 250);
        assert!(client.source().peak_in_flight() <= crate::MAX_CONCURRENT_REQUESTS);
    }

    #[tokio::test]
    async fn test_matchups_through_client() {
        let client = client(MockSource::new());
        let m = client.matchups(&[Water, Ground]).await.unwrap();
        assert_eq!(m.weaknesses, vec![Grass]);
        assert_eq!(m.immunities, vec![Electric]);
    }

    #[tokio::test]
    async fn test_clones_share_cache_and_graph() {
        let client = client(MockSource::kanto());
        let other = client.clone();

        client.analyze_team(&["blastoise"]).await.unwrap();
        other.analyze_team(&["blastoise"]).await.unwrap();

        assert_eq!(other.source().species_calls(), 1);
        assert_eq!(other.source().type_calls(), 18);
    }
}
