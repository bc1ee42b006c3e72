//! Domain types for the travel planner.
//!
//! This module contains the core domain model types: cities, transport
//! modes, attractions, and the paths the planner produces. Types enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod attraction;
mod city;
mod error;
mod mode;
mod path;

pub use attraction::{
    Attraction, Category, CategoryFilter, NO_RECOMMENDATION_DESCRIPTION, NO_RECOMMENDATION_NAME,
    ParseCategoryError, Recommendation, Recommendations,
};
pub use city::{City, InvalidCity};
pub use error::DomainError;
pub use mode::{ParseModeError, TransportMode};
pub use path::{CandidatePath, GeoPoint, PathLeg};
