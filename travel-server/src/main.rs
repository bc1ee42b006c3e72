use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_server::cache::GraphCache;
use travel_server::config::ServerConfig;
use travel_server::layover::AttractionCatalog;
use travel_server::planner::SearchConfig;
use travel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    info!(
        graph = %config.graph_path.display(),
        bind = %config.bind_addr,
        ttl_secs = config.cache.ttl.as_secs(),
        "Configuration loaded"
    );

    let catalog = match &config.catalog_path {
        Some(path) => AttractionCatalog::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load attraction catalog, using built-in catalog");
            AttractionCatalog::builtin()
        }),
        None => AttractionCatalog::builtin(),
    };
    info!(cities = catalog.len(), "Attraction catalog ready");

    // Load the graph once up front so a bad document fails at startup
    let graphs = GraphCache::new(&config.cache);
    if let Err(e) = graphs.get_or_load(&config.graph_path).await {
        error!(error = %e, "Failed to load travel graph");
        return ExitCode::FAILURE;
    }

    let state = AppState::new(graphs, config.graph_path, catalog, SearchConfig::default());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Travel Planner listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET  /health            - Health check");
    info!("  GET  /api/cities        - List cities");
    info!("  GET  /routes            - Search routes");
    info!("  GET  /routes/itinerary  - Download a route itinerary");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
