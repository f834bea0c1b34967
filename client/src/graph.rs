//! Loading the type graph from a [`TypeSource`]

use futures_util::future::try_join_all;
use typedex_coverage::TypeGraph;

use crate::error::GraphError;
use crate::source::TypeSource;

/// Fetch every type's relations concurrently and build the graph
///
/// Any failed fetch fails the whole load; no partial graph is returned.
pub async fn load_type_graph<S: TypeSource>(source: &S) -> Result<TypeGraph, GraphError> {
    let types = source.list_types().await?;
    tracing::debug!(types = types.len(), "Fetching type relations");

    let relations = try_join_all(types.iter().map(|t| async move {
        let rel = source.fetch_type_relations(*t).await?;
        Ok::<_, GraphError>((*t, rel))
    }))
    .await?;

    let graph = TypeGraph::from_relations(relations)?;

    let asymmetries = graph.asymmetries();
    if !asymmetries.is_empty() {
        tracing::warn!(
            count = asymmetries.len(),
            first = ?asymmetries[0],
            "Type relations disagree between attacker and defender; defender side is used"
        );
    }

    tracing::info!(types = graph.len(), "Loaded type graph");
    Ok(graph)
}
