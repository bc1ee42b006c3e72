//! Route planner using a k-shortest simple paths search.
//!
//! Answers: "what are the best `k` ways to get from this city to that one,
//! under this objective?" Each returned path carries per-leg layover
//! recommendations from the attraction catalog.

mod config;
mod objective;
mod search;


pub use config::SearchConfig;
pub use objective::{Objective, ParseObjectiveError};
pub use search::{Planner, SearchError, SearchRequest, SearchResult};
