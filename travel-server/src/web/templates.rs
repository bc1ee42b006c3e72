//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{CandidatePath, Category, Recommendation};
use crate::itinerary::format_duration;
use crate::layover::LayoverFilters;
use crate::planner::Objective;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cities: Vec<String>,
    pub objectives: Vec<&'static str>,
    pub categories: Vec<&'static str>,
    pub filters: LayoverFilters,
    pub max_paths: usize,
}

impl IndexTemplate {
    pub fn new(cities: Vec<String>, filters: LayoverFilters, max_paths: usize) -> Self {
        let categories = std::iter::once("All")
            .chain(Category::ALL.iter().map(|c| c.as_str()))
            .collect();

        Self {
            cities,
            objectives: vec!["cheapest", "fastest", "bus", "train", "plane"],
            categories,
            filters,
            max_paths,
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route results fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub routes: Vec<RouteView>,
    pub query: QueryView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// The resolved search parameters, echoed back so each route can offer an
/// itinerary download for the same search.
#[derive(Debug, Clone)]
pub struct QueryView {
    pub from: String,
    pub to: String,
    pub objective: Objective,
    pub k: usize,
    pub filters: LayoverFilters,
}

impl QueryView {
    pub fn objective_label(&self) -> &'static str {
        self.objective.as_str()
    }

    pub fn category_label(&self) -> String {
        self.filters.category.to_string()
    }
}

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    /// 1-based position in the result list
    pub index: usize,
    pub label: String,
    pub total_cost: u64,
    pub total_duration: String,
    pub legs: Vec<LegView>,
}

impl RouteView {
    /// Create from a found path.
    pub fn from_path(index: usize, path: &CandidatePath) -> Self {
        Self {
            index,
            label: path.route_label(),
            total_cost: path.total_cost(),
            total_duration: format_duration(path.total_duration()),
            legs: path
                .legs()
                .iter()
                .map(|leg| LegView {
                    from: leg.from.to_string(),
                    to: leg.to.to_string(),
                    mode: leg.mode.title(),
                    cost: leg.cost,
                    duration: format_duration(leg.duration),
                    layover: format_duration(leg.layover_duration),
                    suggestions: leg
                        .layover_recommendations
                        .as_ref()
                        .map(|r| r.suggested().to_vec())
                        .unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Leg view model for display.
#[derive(Debug, Clone)]
pub struct LegView {
    pub from: String,
    pub to: String,
    pub mode: &'static str,
    pub cost: u64,
    pub duration: String,
    pub layover: String,

    /// Real layover suggestions only; empty for the sentinel.
    pub suggestions: Vec<Recommendation>,
}

impl LegView {
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}
