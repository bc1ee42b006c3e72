//! HTTP route handlers.

use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{CategoryFilter, City};
use crate::graph::{Graph, GraphError};
use crate::itinerary::render_itinerary;
use crate::layover::LayoverFilters;
use crate::planner::{Objective, Planner, SearchError, SearchRequest, SearchResult};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/routes", get(search_routes))
        .route("/routes/itinerary", get(download_itinerary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let graph = load_graph(&state).await?;
    let cities = graph.cities().map(|c| c.to_string()).collect();

    let template = IndexTemplate::new(cities, state.config.filters, state.config.max_paths);
    let html = template.render()?;

    Ok(Html(html).into_response())
}

/// List all cities with their coordinates.
async fn list_cities(State(state): State<AppState>) -> Result<Json<CitiesResponse>, AppError> {
    let graph = load_graph(&state).await?;
    Ok(Json(CitiesResponse::from_graph(&graph)))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search for routes between two cities.
async fn search_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteSearchRequest>,
) -> Result<Response, AppError> {
    let (graph, request, result) = run_search(&state, &req).await?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteResultsTemplate {
            routes: result
                .paths
                .iter()
                .enumerate()
                .map(|(i, p)| RouteView::from_path(i + 1, p))
                .collect(),
            query: QueryView {
                from: request.start.to_string(),
                to: request.end.to_string(),
                objective: request.objective,
                k: request.k,
                filters: request.filters,
            },
        };
        let html = template.render()?;

        Ok(Html(html).into_response())
    } else {
        let routes = result
            .paths
            .iter()
            .enumerate()
            .map(|(i, p)| RouteResult::from_path(i + 1, p, &graph))
            .collect();

        Ok(Json(RouteSearchResponse {
            from: request.start,
            to: request.end,
            objective: request.objective.to_string(),
            routes,
            states_expanded: result.states_expanded,
        })
        .into_response())
    }
}

/// Download the itinerary of one route as a text file.
async fn download_itinerary(
    State(state): State<AppState>,
    Query(req): Query<RouteSearchRequest>,
) -> Result<Response, AppError> {
    let index = req.route.ok_or_else(|| AppError::BadRequest {
        message: "Missing route number".to_string(),
    })?;

    let (_, request, result) = run_search(&state, &req).await?;

    let path = index
        .checked_sub(1)
        .and_then(|i| result.paths.get(i))
        .ok_or_else(|| AppError::BadRequest {
            message: format!(
                "Route {index} not found ({} route(s) available)",
                result.paths.len()
            ),
        })?;

    let text = render_itinerary(
        path,
        index,
        request.end.as_str(),
        &state.catalog,
        Local::now().naive_local(),
    )?;

    let disposition = format!("attachment; filename=\"route_{index}.txt\"");
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    )
        .into_response())
}

/// Get the current graph from the cache.
async fn load_graph(state: &AppState) -> Result<Arc<Graph>, AppError> {
    Ok(state.graphs.get_or_load(&state.graph_path).await?)
}

/// Parse the query, validate it against the graph and run the planner.
async fn run_search(
    state: &AppState,
    req: &RouteSearchRequest,
) -> Result<(Arc<Graph>, SearchRequest, SearchResult), AppError> {
    let start = parse_city(&req.from, "origin")?;
    let end = parse_city(&req.to, "destination")?;

    let objective = match req.objective.as_deref() {
        Some(s) => s.parse::<Objective>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => Objective::Cheapest,
    };

    let filters = parse_filters(&state.config.filters, req)?;
    let k = state.config.path_count(req.k);

    let graph = load_graph(state).await?;

    let request = SearchRequest::new(start, end, objective, k).with_filters(filters);
    request.validate(&graph)?;

    let result = tokio::task::spawn_blocking({
        let graph = Arc::clone(&graph);
        let catalog = Arc::clone(&state.catalog);
        let config = Arc::clone(&state.config);
        let request = request.clone();
        move || Planner::new(&graph, &catalog, &config).search(&request)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("Search task failed: {e}"),
    })?;

    Ok((graph, request, result))
}

fn parse_city(name: &str, role: &str) -> Result<City, AppError> {
    City::parse_normalized(name).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {role} city: {name:?}"),
    })
}

/// Overlay the request's layover preferences on the configured defaults.
fn parse_filters(
    defaults: &LayoverFilters,
    req: &RouteSearchRequest,
) -> Result<LayoverFilters, AppError> {
    let category = match req.category.as_deref() {
        Some(s) => s.parse::<CategoryFilter>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => defaults.category,
    };

    Ok(LayoverFilters {
        min_layover: req.min_layover.unwrap_or(defaults.min_layover),
        max_layover: req.max_layover.unwrap_or(defaults.max_layover),
        category,
        max_budget: req.max_budget.unwrap_or(defaults.max_budget),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
        }
    }
}

impl From<Arc<GraphError>> for AppError {
    fn from(e: Arc<GraphError>) -> Self {
        AppError::Internal {
            message: format!("Failed to load travel graph: {e}"),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
