//! Path types.
//!
//! A `CandidatePath` is a completed, loop-free route from origin to
//! destination, made of one `PathLeg` per traversed edge. Paths are produced
//! by the planner and handed to callers; they own their data and never point
//! back into the graph.

use serde::Serialize;

use super::{City, DomainError, Recommendations, TransportMode};

/// A latitude/longitude pair, used only for map rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One traversed edge within a path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLeg {
    pub from: City,
    pub to: City,
    pub mode: TransportMode,

    /// Fare paid for this leg.
    pub cost: u64,

    /// Travel time in minutes.
    pub duration: u64,

    /// Layover at `to` in minutes. Always 0 for the leg leaving the origin.
    pub layover_duration: u64,

    /// Suggestions for the layover at `to`.
    ///
    /// `None` means they were not computed, which is the case for the leg
    /// leaving the origin.
    pub layover_recommendations: Option<Recommendations>,
}

impl PathLeg {
    /// Returns true if this leg has real suggestions worth showing.
    pub fn has_layover_suggestions(&self) -> bool {
        self.layover_recommendations
            .as_ref()
            .is_some_and(|recs| !recs.is_none_suitable())
    }
}

/// A completed simple path from origin to destination.
///
/// # Invariants
///
/// - At least two cities, none repeated
/// - `legs.len() == cities.len() - 1`, and leg `i` runs from `cities[i]` to `cities[i + 1]`
/// - `total_cost` is the sum of leg costs
/// - `total_duration` is the sum of leg durations
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePath {
    cities: Vec<City>,
    legs: Vec<PathLeg>,
    total_cost: u64,
    total_duration: u64,
}

impl CandidatePath {
    /// Build a path from its legs, checking they chain and never revisit a city.
    pub fn from_legs(legs: Vec<PathLeg>) -> Result<Self, DomainError> {
        let first = legs.first().ok_or(DomainError::EmptyPath)?;

        let mut cities = Vec::with_capacity(legs.len() + 1);
        cities.push(first.from.clone());

        for leg in &legs {
            let last = &cities[cities.len() - 1];
            if *last != leg.from {
                return Err(DomainError::Disconnected {
                    from: last.clone(),
                    to: leg.from.clone(),
                });
            }
            if cities.contains(&leg.to) {
                return Err(DomainError::RepeatedCity(leg.to.clone()));
            }
            cities.push(leg.to.clone());
        }

        let total_cost = legs
            .iter()
            .try_fold(0u64, |acc, l| acc.checked_add(l.cost))
            .ok_or(DomainError::TotalOverflow)?;
        let total_duration = legs
            .iter()
            .try_fold(0u64, |acc, l| acc.checked_add(l.duration))
            .ok_or(DomainError::TotalOverflow)?;

        Ok(Self {
            cities,
            legs,
            total_cost,
            total_duration,
        })
    }

    /// The sequence of cities visited, origin first.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn legs(&self) -> &[PathLeg] {
        &self.legs
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Total travel time in minutes.
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    pub fn origin(&self) -> &City {
        &self.cities[0]
    }

    pub fn destination(&self) -> &City {
        &self.cities[self.cities.len() - 1]
    }

    /// Modes used, one per leg.
    pub fn modes_used(&self) -> impl Iterator<Item = TransportMode> + '_ {
        self.legs.iter().map(|l| l.mode)
    }

    /// Human-readable route, e.g. "Mumbai → Pune → Goa".
    pub fn route_label(&self) -> String {
        self.cities
            .iter()
            .map(City::as_str)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}
