//! Layover recommendations.
//!
//! Given a city and how long a traveller waits there, suggests attractions
//! that fit the wait and the traveller's preferences. Lookups are pure: the
//! catalog is loaded up front and never touched at call time.

mod catalog;

use crate::domain::{CategoryFilter, Recommendation, Recommendations};

pub use catalog::{AttractionCatalog, CatalogError};

/// Traveller preferences that gate layover recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoverFilters {
    /// Shortest layover worth recommending anything for (minutes).
    pub min_layover: u64,

    /// Longest layover worth recommending anything for (minutes).
    pub max_layover: u64,

    pub category: CategoryFilter,

    /// Highest acceptable cost per attraction.
    pub max_budget: u64,
}

impl Default for LayoverFilters {
    fn default() -> Self {
        Self {
            min_layover: 60,
            max_layover: 720, // 12 hours
            category: CategoryFilter::All,
            max_budget: 1000,
        }
    }
}

impl LayoverFilters {
    /// Returns true if a layover of this length is inside the window.
    pub fn window_contains(&self, layover_minutes: u64) -> bool {
        self.min_layover <= layover_minutes && layover_minutes <= self.max_layover
    }
}

impl AttractionCatalog {
    /// Recommend attractions in `city` for a layover of `layover_minutes`.
    ///
    /// An attraction qualifies when the layover is inside the filter window,
    /// the visit fits in the layover, its category passes the filter and it
    /// costs no more than the budget. Qualifying attractions keep catalog
    /// order. When nothing qualifies, including when the city has no catalog
    /// entry, the result is `Recommendations::NoneSuitable`.
    pub fn recommend(
        &self,
        city: &str,
        layover_minutes: u64,
        filters: &LayoverFilters,
    ) -> Recommendations {
        if !filters.window_contains(layover_minutes) {
            return Recommendations::NoneSuitable;
        }

        let list = self
            .attractions(city)
            .iter()
            .filter(|a| u64::from(a.duration) <= layover_minutes)
            .filter(|a| filters.category.matches(a.category))
            .filter(|a| u64::from(a.cost) <= filters.max_budget)
            .map(Recommendation::from_attraction)
            .collect();

        Recommendations::from_list(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attraction, Category, NO_RECOMMENDATION_NAME};

    fn attraction(name: &str, duration: u32, category: Category, cost: u32) -> Attraction {
        Attraction {
            name: name.to_string(),
            duration,
            description: format!("{name} description."),
            category,
            cost,
            rating: 4.5,
        }
    }

    fn catalog() -> AttractionCatalog {
        let mut catalog = AttractionCatalog::new();
        catalog.add(
            "Jaipur",
            [
                attraction("Hawa Mahal", 60, Category::Landmark, 50),
                attraction("Amber Fort", 180, Category::Historical, 200),
                attraction("City Palace", 120, Category::Cultural, 1500),
                attraction("Jal Mahal", 30, Category::Landmark, 0),
            ],
        );
        catalog
    }

    fn names(recs: &Recommendations) -> Vec<&str> {
        recs.suggested().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn default_filters() {
        let filters = LayoverFilters::default();
        assert_eq!(filters.min_layover, 60);
        assert_eq!(filters.max_layover, 720);
        assert_eq!(filters.category, CategoryFilter::All);
        assert_eq!(filters.max_budget, 1000);
    }

    #[test]
    fn filters_by_duration_and_budget_in_catalog_order() {
        let recs = catalog().recommend("Jaipur", 180, &LayoverFilters::default());
        // City Palace is over budget
        assert_eq!(names(&recs), ["Hawa Mahal", "Amber Fort", "Jal Mahal"]);
    }

    #[test]
    fn visit_must_fit_in_layover() {
        let recs = catalog().recommend("Jaipur", 90, &LayoverFilters::default());
        assert_eq!(names(&recs), ["Hawa Mahal", "Jal Mahal"]);
    }

    #[test]
    fn filters_by_category() {
        let filters = LayoverFilters {
            category: CategoryFilter::Only(Category::Historical),
            ..LayoverFilters::default()
        };
        let recs = catalog().recommend("Jaipur", 300, &filters);
        assert_eq!(names(&recs), ["Amber Fort"]);
    }

    #[test]
    fn layover_outside_window_gets_sentinel() {
        let filters = LayoverFilters {
            min_layover: 100,
            max_layover: 200,
            ..LayoverFilters::default()
        };
        assert!(catalog().recommend("Jaipur", 99, &filters).is_none_suitable());
        assert!(catalog().recommend("Jaipur", 201, &filters).is_none_suitable());
        assert!(!catalog().recommend("Jaipur", 100, &filters).is_none_suitable());
        assert!(!catalog().recommend("Jaipur", 200, &filters).is_none_suitable());
    }

    #[test]
    fn city_without_catalog_gets_sentinel_not_empty_list() {
        let recs = catalog().recommend("Pune", 120, &LayoverFilters::default());
        assert_eq!(recs, Recommendations::NoneSuitable);

        let entries = recs.to_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, NO_RECOMMENDATION_NAME);
    }

    #[test]
    fn zero_budget_keeps_free_attractions() {
        let filters = LayoverFilters {
            max_budget: 0,
            ..LayoverFilters::default()
        };
        let recs = catalog().recommend("Jaipur", 600, &filters);
        assert_eq!(names(&recs), ["Jal Mahal"]);
    }
}
