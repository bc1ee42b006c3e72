//! Transport modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0:?} (expected bus, train or plane)")]
pub struct ParseModeError(pub String);

/// A way of travelling along an edge.
///
/// The set is closed: every edge carries a fare for each of these modes,
/// even if that fare marks the mode as unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bus,
    Train,
    Plane,
}

impl TransportMode {
    /// All modes, in the order the planner tries them.
    pub const ALL: [TransportMode; 3] = [TransportMode::Bus, TransportMode::Train, TransportMode::Plane];

    /// Lowercase key used in graph documents and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Plane => "plane",
        }
    }

    /// Capitalized name for itineraries, e.g. "Train".
    pub fn title(&self) -> &'static str {
        match self {
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Train",
            TransportMode::Plane => "Plane",
        }
    }
}

impl FromStr for TransportMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bus" => Ok(TransportMode::Bus),
            "train" => Ok(TransportMode::Train),
            "plane" => Ok(TransportMode::Plane),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("bus".parse::<TransportMode>(), Ok(TransportMode::Bus));
        assert_eq!("Train".parse::<TransportMode>(), Ok(TransportMode::Train));
        assert_eq!(" PLANE ".parse::<TransportMode>(), Ok(TransportMode::Plane));
    }

    #[test]
    fn reject_unknown() {
        let err = "ferry".parse::<TransportMode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown transport mode: \"ferry\" (expected bus, train or plane)"
        );
    }

    #[test]
    fn all_in_fixed_order() {
        let keys: Vec<&str> = TransportMode::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(keys, ["bus", "train", "plane"]);
    }

    #[test]
    fn display_and_title() {
        assert_eq!(TransportMode::Plane.to_string(), "plane");
        assert_eq!(TransportMode::Plane.title(), "Plane");
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransportMode::Train).unwrap(),
            "\"train\""
        );
        let mode: TransportMode = serde_json::from_str("\"bus\"").unwrap();
        assert_eq!(mode, TransportMode::Bus);
    }
}
