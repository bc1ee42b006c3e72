//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::GraphCache;
use crate::layover::AttractionCatalog;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Loaded graphs, keyed by source path
    pub graphs: GraphCache,

    /// Graph document searches run against
    pub graph_path: Arc<PathBuf>,

    /// Attractions for layover recommendations and itineraries
    pub catalog: Arc<AttractionCatalog>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        graphs: GraphCache,
        graph_path: impl Into<PathBuf>,
        catalog: AttractionCatalog,
        config: SearchConfig,
    ) -> Self {
        Self {
            graphs,
            graph_path: Arc::new(graph_path.into()),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
