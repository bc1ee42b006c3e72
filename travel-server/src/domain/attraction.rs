//! Attractions and layover recommendations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name of the sentinel entry that stands in for "nothing qualifies".
pub const NO_RECOMMENDATION_NAME: &str = "None";

/// Description of the sentinel entry.
pub const NO_RECOMMENDATION_DESCRIPTION: &str = "No suitable attractions for your preferences.";

/// Error returned when parsing an unknown category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attraction category: {0:?}")]
pub struct ParseCategoryError(pub String);

/// Kind of attraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Landmark,
    Historical,
    Cultural,
    Nature,
    Religious,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Landmark,
        Category::Historical,
        Category::Cultural,
        Category::Nature,
        Category::Religious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Landmark => "Landmark",
            Category::Historical => "Historical",
            Category::Cultural => "Cultural",
            Category::Nature => "Nature",
            Category::Religious => "Religious",
        }
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which categories a traveller is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if attractions of `category` pass this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

/// A static catalog entry for something worth visiting in a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,

    /// Estimated visit duration in minutes.
    pub duration: u32,

    #[serde(default)]
    pub description: String,

    pub category: Category,

    /// Entry cost, same currency as fares.
    pub cost: u32,

    /// Rating out of 5.
    pub rating: f32,
}

/// A suggestion shown for a layover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub description: String,
}

impl Recommendation {
    /// Build a recommendation, folding visit details into the description.
    pub fn from_attraction(attraction: &Attraction) -> Self {
        Self {
            name: attraction.name.clone(),
            description: format!(
                "{} (Est. {} min, Cost: ₹{}, Rating: {}/5)",
                attraction.description, attraction.duration, attraction.cost, attraction.rating
            ),
        }
    }

    /// The sentinel entry meaning "checked, nothing qualifies".
    pub fn none_suitable() -> Self {
        Self {
            name: NO_RECOMMENDATION_NAME.to_string(),
            description: NO_RECOMMENDATION_DESCRIPTION.to_string(),
        }
    }
}

/// Outcome of asking for layover recommendations.
///
/// `NoneSuitable` is an explicit answer, distinct from recommendations that
/// were never computed (see `PathLeg::layover_recommendations`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendations {
    /// At least one attraction qualifies, in catalog order.
    Suggested(Vec<Recommendation>),
    /// Nothing qualifies.
    NoneSuitable,
}

impl Recommendations {
    /// Wrap a list, mapping an empty one to the sentinel.
    pub fn from_list(list: Vec<Recommendation>) -> Self {
        if list.is_empty() {
            Recommendations::NoneSuitable
        } else {
            Recommendations::Suggested(list)
        }
    }

    /// Returns the real suggestions, empty for the sentinel.
    pub fn suggested(&self) -> &[Recommendation] {
        match self {
            Recommendations::Suggested(list) => list,
            Recommendations::NoneSuitable => &[],
        }
    }

    pub fn is_none_suitable(&self) -> bool {
        matches!(self, Recommendations::NoneSuitable)
    }

    /// Flatten into a list for display, with the sentinel as a single entry.
    pub fn to_entries(&self) -> Vec<Recommendation> {
        match self {
            Recommendations::Suggested(list) => list.clone(),
            Recommendations::NoneSuitable => vec![Recommendation::none_suitable()],
        }
    }
}
