//! Search objectives.

use std::fmt;
use std::str::FromStr;

use crate::domain::{CandidatePath, TransportMode};

/// Error returned when parsing an unknown objective.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown objective: {0:?} (expected cheapest, fastest, bus, train or plane)")]
pub struct ParseObjectiveError(pub String);

/// What the planner optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Lowest total cost, any mode.
    Cheapest,
    /// Lowest total duration, any mode.
    Fastest,
    /// Lowest total cost using only one mode.
    Mode(TransportMode),
}

impl Objective {
    /// Modes the planner may use under this objective.
    pub fn modes(&self) -> &'static [TransportMode] {
        match self {
            Objective::Cheapest | Objective::Fastest => &TransportMode::ALL,
            Objective::Mode(TransportMode::Bus) => &[TransportMode::Bus],
            Objective::Mode(TransportMode::Train) => &[TransportMode::Train],
            Objective::Mode(TransportMode::Plane) => &[TransportMode::Plane],
        }
    }

    /// The ranking metric for a partial or complete path.
    pub fn priority(&self, cost: u64, duration: u64) -> u64 {
        match self {
            Objective::Fastest => duration,
            Objective::Cheapest | Objective::Mode(_) => cost,
        }
    }

    /// The ranking metric of a completed path.
    pub fn metric(&self, path: &CandidatePath) -> u64 {
        self.priority(path.total_cost(), path.total_duration())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Cheapest => "cheapest",
            Objective::Fastest => "fastest",
            Objective::Mode(mode) => mode.as_str(),
        }
    }
}

impl FromStr for Objective {
    type Err = ParseObjectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheapest" => Ok(Objective::Cheapest),
            "fastest" => Ok(Objective::Fastest),
            other => other
                .parse::<TransportMode>()
                .map(Objective::Mode)
                .map_err(|_| ParseObjectiveError(s.to_string())),
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
