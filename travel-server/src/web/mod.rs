//! Web layer for the travel planner.
//!
//! Provides HTTP endpoints for listing cities, searching routes and
//! downloading itineraries.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
