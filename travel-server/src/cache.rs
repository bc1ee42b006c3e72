//! Caching layer for travel graphs.
//!
//! Loading and normalizing a graph document is the expensive part of serving
//! a search, and the document changes rarely. Graphs are cached by source
//! path and shared as `Arc<Graph>` across concurrent searches; an entry is
//! reloaded from disk once its TTL has passed.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::info;

use crate::graph::{Graph, GraphError};

/// Configuration for the graph cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached graphs.
    pub ttl: Duration,

    /// Maximum number of cached graphs.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 16,
        }
    }
}

/// Cache of loaded graphs, keyed by source path.
#[derive(Clone)]
pub struct GraphCache {
    graphs: MokaCache<PathBuf, Arc<Graph>>,
}

impl GraphCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let graphs = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { graphs }
    }

    /// Get the graph at `path`, loading it if it isn't cached.
    ///
    /// Concurrent calls for the same path share a single load. Failed loads
    /// are not cached.
    pub async fn get_or_load(&self, path: &Path) -> Result<Arc<Graph>, Arc<GraphError>> {
        self.graphs
            .try_get_with(path.to_path_buf(), load_graph(path))
            .await
    }

    /// Insert an already-built graph under `path`.
    pub async fn insert(&self, path: &Path, graph: Graph) {
        self.graphs.insert(path.to_path_buf(), Arc::new(graph)).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.graphs.entry_count()
    }

    /// Invalidate all cached graphs.
    pub fn invalidate_all(&self) {
        self.graphs.invalidate_all();
    }
}

async fn load_graph(path: &Path) -> Result<Arc<Graph>, GraphError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let graph = Graph::from_json_str(&contents)?;

    info!(
        path = %path.display(),
        cities = graph.len(),
        edges = graph.edge_count(),
        "Loaded travel graph"
    );

    Ok(Arc::new(graph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn graph_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const LINE: &str = r#"{"A": {"B": {"price": {"bus": 100}, "duration": {"bus": 60}}}}"#;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 16);
    }

    #[tokio::test]
    async fn loads_once_and_shares() {
        let file = graph_file(LINE);
        let cache = GraphCache::new(&CacheConfig::default());

        let first = cache.get_or_load(file.path()).await.unwrap();
        let second = cache.get_or_load(file.path()).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
        assert!(first.edge("B", "A").is_some());
    }

    #[tokio::test]
    async fn cached_graph_survives_file_change() {
        let file = graph_file(LINE);
        let cache = GraphCache::new(&CacheConfig::default());
        let first = cache.get_or_load(file.path()).await.unwrap();

        std::fs::write(file.path(), "{}").unwrap();
        let second = cache.get_or_load(file.path()).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn invalidate_forces_reload() {
        let file = graph_file(LINE);
        let cache = GraphCache::new(&CacheConfig::default());

        let first = cache.get_or_load(file.path()).await.unwrap();
        cache.invalidate_all();
        let second = cache.get_or_load(file.path()).await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = GraphCache::new(&CacheConfig::default());

        let err = cache
            .get_or_load(&dir.path().join("missing.json"))
            .await
            .unwrap_err();

        assert!(matches!(*err, GraphError::Io { .. }));
    }

    #[tokio::test]
    async fn invalid_json_is_not_cached() {
        let file = graph_file("{not json");
        let cache = GraphCache::new(&CacheConfig::default());

        let err = cache.get_or_load(file.path()).await.unwrap_err();
        assert!(matches!(*err, GraphError::Json(_)));

        std::fs::write(file.path(), LINE).unwrap();
        let graph = cache.get_or_load(file.path()).await.unwrap();
        assert_eq!(graph.len(), 2);
    }

    #[tokio::test]
    async fn inserted_graph_is_served() {
        let cache = GraphCache::new(&CacheConfig::default());
        let path = Path::new("/nonexistent/graph.json");

        cache
            .insert(path, Graph::from_json_str(LINE).unwrap())
            .await;

        let graph = cache.get_or_load(path).await.unwrap();
        assert!(graph.contains("A"));
    }
}
