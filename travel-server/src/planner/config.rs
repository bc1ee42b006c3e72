//! Search configuration for the route planner.

use crate::layover::LayoverFilters;

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of paths to return when a request doesn't say.
    pub default_paths: usize,

    /// Upper bound on paths per request.
    /// Requests asking for more are clamped to this.
    pub max_paths: usize,

    /// Per-city expansion limit, as a multiple of the requested path count.
    /// A city popped more than `k * pop_cap_factor` times is not expanded
    /// again during that search.
    pub pop_cap_factor: usize,

    /// Layover filters used when a request doesn't override them.
    pub filters: LayoverFilters,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        default_paths: usize,
        max_paths: usize,
        pop_cap_factor: usize,
        filters: LayoverFilters,
    ) -> Self {
        Self {
            default_paths,
            max_paths,
            pop_cap_factor,
            filters,
        }
    }

    /// Resolve a requested path count: default when absent, clamped to `max_paths`.
    pub fn path_count(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_paths).min(self.max_paths)
    }

    /// How many times one city may be popped in a search for `k` paths.
    pub fn pop_cap(&self, k: usize) -> usize {
        k.saturating_mul(self.pop_cap_factor)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_paths: 1,
            max_paths: 10,
            pop_cap_factor: 10,
            filters: LayoverFilters::default(),
        }
    }
}
