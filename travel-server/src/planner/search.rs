//! K-shortest simple paths search.
//!
//! A best-first enumeration over partial paths rather than over cities:
//! every frontier entry carries its own path, legs and visited set, so many
//! routes through the same city can be in flight at once. Completed paths
//! come off the frontier in order of the objective's metric.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace, warn};

use crate::domain::{CandidatePath, City, PathLeg};
use crate::graph::Graph;
use crate::layover::{AttractionCatalog, LayoverFilters};

use super::config::SearchConfig;
use super::objective::Objective;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Request for route search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub start: City,
    pub end: City,
    pub objective: Objective,

    /// Maximum number of paths to return.
    pub k: usize,

    /// Preferences for layover recommendations.
    pub filters: LayoverFilters,
}

impl SearchRequest {
    /// Create a new search request with default layover filters.
    pub fn new(start: City, end: City, objective: Objective, k: usize) -> Self {
        Self {
            start,
            end,
            objective,
            k,
            filters: LayoverFilters::default(),
        }
    }

    /// Replace the layover filters.
    pub fn with_filters(mut self, filters: LayoverFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Validate the search request against a graph.
    ///
    /// The planner treats an invalid request as "no results"; this lets
    /// callers tell the two apart.
    pub fn validate(&self, graph: &Graph) -> Result<(), SearchError> {
        if self.start == self.end {
            return Err(SearchError::InvalidRequest(
                "start and end must be different cities".to_string(),
            ));
        }

        for city in [&self.start, &self.end] {
            if !graph.contains(city.as_str()) {
                return Err(SearchError::InvalidRequest(format!("unknown city: {city}")));
            }
        }

        if self.k == 0 {
            return Err(SearchError::InvalidRequest(
                "at least one path must be requested".to_string(),
            ));
        }

        Ok(())
    }
}

/// Result of route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found paths, best first.
    pub paths: Vec<CandidatePath>,

    /// Number of frontier states expanded during search.
    pub states_expanded: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            paths: Vec::new(),
            states_expanded: 0,
        }
    }
}

/// A partial path on the frontier.
#[derive(Debug, Clone)]
struct SearchState {
    /// Current city (last element of `cities`).
    city: City,

    /// Cities visited so far, origin first.
    cities: Vec<City>,

    /// Legs travelled so far.
    legs: Vec<PathLeg>,

    /// Sum of leg costs.
    cost: u64,

    /// Sum of leg durations (minutes).
    duration: u64,

    /// Cities this path may not enter again.
    visited: HashSet<City>,

    /// Arrival time at `city`, measured from departure at the origin.
    arrival: u64,
}

impl SearchState {
    fn initial(start: &City) -> Self {
        Self {
            city: start.clone(),
            cities: vec![start.clone()],
            legs: Vec::new(),
            cost: 0,
            duration: 0,
            visited: HashSet::from([start.clone()]),
            arrival: 0,
        }
    }

    /// Extend this path by one leg, copying its history.
    ///
    /// Returns `None` if the running cost or duration would overflow.
    fn extend(&self, leg: PathLeg) -> Option<Self> {
        let cost = self.cost.checked_add(leg.cost)?;
        let duration = self.duration.checked_add(leg.duration)?;
        let to = leg.to.clone();

        let mut cities = self.cities.clone();
        cities.push(to.clone());

        let mut legs = self.legs.clone();
        legs.push(leg);

        let mut visited = self.visited.clone();
        visited.insert(to.clone());

        Some(Self {
            city: to,
            cities,
            legs,
            cost,
            duration,
            visited,
            arrival: duration,
        })
    }

    fn to_path(&self) -> Option<CandidatePath> {
        match CandidatePath::from_legs(self.legs.clone()) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(city = %self.city, error = %e, "Dropping malformed completed path");
                None
            }
        }
    }
}

/// Frontier entry ordered by `(priority, seq)`, smallest first.
///
/// `seq` is unique and increasing, so ties on priority pop in insertion
/// order and the state itself never needs to be comparable.
#[derive(Debug)]
struct FrontierEntry {
    priority: u64,
    seq: u64,
    state: SearchState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority frontier with stable tie-breaking.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    fn push(&mut self, priority: u64, state: SearchState) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            priority,
            seq,
            state,
        });
    }

    fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|entry| entry.state)
    }
}

/// Route planner over a shared, read-only graph.
pub struct Planner<'a> {
    graph: &'a Graph,
    catalog: &'a AttractionCatalog,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a Graph, catalog: &'a AttractionCatalog, config: &'a SearchConfig) -> Self {
        Self {
            graph,
            catalog,
            config,
        }
    }

    /// Find up to `request.k` simple paths from start to end, best first.
    ///
    /// Paths are ordered by the objective's metric, ties broken by discovery
    /// order. Each city is expanded at most `k * pop_cap_factor` times, so on
    /// dense graphs fewer than `k` paths may come back even when more exist.
    /// Invalid requests (unknown or identical endpoints, `k == 0`) yield no
    /// paths rather than an error.
    pub fn search(&self, request: &SearchRequest) -> SearchResult {
        if let Err(e) = request.validate(self.graph) {
            debug!(error = %e, "Search request yields no paths");
            return SearchResult::empty();
        }

        let pop_cap = self.config.pop_cap(request.k);
        let mut pops: HashMap<City, usize> = HashMap::new();
        let mut paths = Vec::new();
        let mut states_expanded = 0;

        let mut frontier = Frontier::default();
        frontier.push(0, SearchState::initial(&request.start));

        while paths.len() < request.k {
            let Some(state) = frontier.pop() else {
                break;
            };

            let count = pops.entry(state.city.clone()).or_insert(0);
            *count += 1;
            if *count > pop_cap {
                trace!(city = %state.city, "Pop cap reached, discarding state");
                continue;
            }

            if state.city == request.end {
                if let Some(path) = state.to_path() {
                    trace!(
                        route = %path.route_label(),
                        cost = path.total_cost(),
                        duration = path.total_duration(),
                        "Path completed"
                    );
                    paths.push(path);
                }
                continue;
            }

            states_expanded += 1;
            self.expand(&state, request, &mut frontier);
        }

        debug!(
            start = %request.start,
            end = %request.end,
            objective = %request.objective,
            paths = paths.len(),
            states_expanded,
            "Search complete"
        );

        SearchResult {
            paths,
            states_expanded,
        }
    }

    /// Push one successor per unvisited neighbor and usable mode.
    fn expand(&self, state: &SearchState, request: &SearchRequest, frontier: &mut Frontier) {
        let leaving_origin = state.legs.is_empty();

        for (neighbor, edge) in self.graph.neighbors(state.city.as_str()) {
            if state.visited.contains(neighbor) {
                continue;
            }

            for &mode in request.objective.modes() {
                let Some(fare) = edge.usable(mode) else {
                    continue;
                };

                let Some(arrival) = state.duration.checked_add(fare.duration) else {
                    trace!(from = %state.city, to = %neighbor, %mode, "Duration overflow, skipping leg");
                    continue;
                };
                let (layover_duration, layover_recommendations) = if leaving_origin {
                    (0, None)
                } else {
                    let layover = arrival.saturating_sub(state.arrival);
                    let recs = self
                        .catalog
                        .recommend(neighbor.as_str(), layover, &request.filters);
                    (layover, Some(recs))
                };

                let Some(next) = state.extend(PathLeg {
                    from: state.city.clone(),
                    to: neighbor.clone(),
                    mode,
                    cost: fare.price,
                    duration: fare.duration,
                    layover_duration,
                    layover_recommendations,
                }) else {
                    trace!(from = %state.city, to = %neighbor, %mode, "Cost overflow, skipping leg");
                    continue;
                };

                let priority = request.objective.priority(next.cost, next.duration);
                frontier.push(priority, next);
            }
        }
    }
}
