//! Multi-modal travel route planner server.
//!
//! A web application that answers: "what are the best few ways to get from
//! this city to that one by bus, train or plane, and what can I see while
//! changing?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod graph;
pub mod itinerary;
pub mod layover;
pub mod planner;
pub mod web;
