//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{CandidatePath, City, GeoPoint, PathLeg, Recommendation, TransportMode};
use crate::graph::Graph;
use crate::itinerary::format_duration;

/// Query for route search and itinerary download.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteSearchRequest {
    /// Origin city name
    pub from: String,

    /// Destination city name
    pub to: String,

    /// "cheapest", "fastest", "bus", "train" or "plane" (defaults to cheapest)
    pub objective: Option<String>,

    /// Number of routes wanted
    pub k: Option<usize>,

    /// Layover window, minutes
    pub min_layover: Option<u64>,
    pub max_layover: Option<u64>,

    /// Attraction category, or "All"
    pub category: Option<String>,

    /// Highest acceptable cost per attraction
    pub max_budget: Option<u64>,

    /// 1-based route number (itinerary download only)
    pub route: Option<usize>,
}

/// A city in the city listing.
#[derive(Debug, Serialize)]
pub struct CityResult {
    pub name: City,

    /// Coordinates, if the graph has them
    pub location: Option<GeoPoint>,
}

/// Response listing all cities.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityResult>,
}

impl CitiesResponse {
    pub fn from_graph(graph: &Graph) -> Self {
        let cities = graph
            .cities()
            .map(|city| CityResult {
                name: city.clone(),
                location: graph.location(city.as_str()),
            })
            .collect();
        Self { cities }
    }
}

/// A leg in route results.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub from: City,
    pub to: City,
    pub mode: TransportMode,
    pub cost: u64,

    /// Minutes
    pub duration: u64,

    /// Minutes waited at `to`
    pub layover_duration: u64,

    /// Recommendations for the layover at `to`. Empty when not computed
    /// (first leg); a single "None" entry when nothing qualified.
    pub layover_recommendations: Vec<Recommendation>,
}

impl LegResult {
    pub fn from_leg(leg: &PathLeg) -> Self {
        Self {
            from: leg.from.clone(),
            to: leg.to.clone(),
            mode: leg.mode,
            cost: leg.cost,
            duration: leg.duration,
            layover_duration: leg.layover_duration,
            layover_recommendations: leg
                .layover_recommendations
                .as_ref()
                .map(|r| r.to_entries())
                .unwrap_or_default(),
        }
    }
}

/// A located city along a route, for map rendering.
#[derive(Debug, Serialize)]
pub struct RoutePoint {
    pub city: City,
    pub lat: f64,
    pub lon: f64,
}

/// A route in search results.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// 1-based position in the result list
    pub index: usize,

    pub cities: Vec<City>,
    pub total_cost: u64,

    /// Minutes
    pub total_duration: u64,

    /// e.g. "3h 20m"
    pub total_duration_display: String,

    pub legs: Vec<LegResult>,

    /// Coordinates of the cities along the route that have them, in route order
    pub points: Vec<RoutePoint>,
}

impl RouteResult {
    pub fn from_path(index: usize, path: &CandidatePath, graph: &Graph) -> Self {
        let points = path
            .cities()
            .iter()
            .filter_map(|city| {
                graph.location(city.as_str()).map(|p| RoutePoint {
                    city: city.clone(),
                    lat: p.lat,
                    lon: p.lon,
                })
            })
            .collect();

        Self {
            index,
            cities: path.cities().to_vec(),
            total_cost: path.total_cost(),
            total_duration: path.total_duration(),
            total_duration_display: format_duration(path.total_duration()),
            legs: path.legs().iter().map(LegResult::from_leg).collect(),
            points,
        }
    }
}

/// Response from route search.
#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    pub from: City,
    pub to: City,
    pub objective: String,
    pub routes: Vec<RouteResult>,

    /// Frontier states expanded by the search
    pub states_expanded: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
