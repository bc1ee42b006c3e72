//! City identifiers.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city name: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// A city name used as a node key in the travel graph.
///
/// Names are non-empty and carry no leading or trailing whitespace. This type
/// guarantees that any `City` value is valid by construction. Cloning is
/// cheap (a reference count bump), which matters because search states copy
/// their city paths on every extension.
///
/// # Examples
///
/// ```
/// use travel_server::domain::City;
///
/// let mumbai = City::parse("Mumbai").unwrap();
/// assert_eq!(mumbai.as_str(), "Mumbai");
///
/// // Empty names are rejected
/// assert!(City::parse("").is_err());
///
/// // Padded names are rejected
/// assert!(City::parse(" Delhi").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct City(Arc<str>);

impl City {
    /// Parse a city name from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        if s.is_empty() {
            return Err(InvalidCity {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidCity {
                reason: "must not have surrounding whitespace",
            });
        }

        Ok(City(Arc::from(s)))
    }

    /// Parse a city name, trimming surrounding whitespace first.
    ///
    /// Useful for user input from query strings.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCity> {
        Self::parse(s.trim())
    }

    /// Returns the city name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for City {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for City {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        City::parse(&s).map_err(serde::de::Error::custom)
    }
}
