//! Multi-modal edges.

use serde_json::Value;
use tracing::warn;

use crate::domain::TransportMode;

/// Price and duration for one mode on one edge.
///
/// A zero in either field means the mode is not available on the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fare {
    pub price: u64,

    /// Travel time in minutes.
    pub duration: u64,
}

impl Fare {
    pub fn new(price: u64, duration: u64) -> Self {
        Self { price, duration }
    }

    /// A mode is usable only when both price and duration are positive.
    pub fn is_usable(&self) -> bool {
        self.price > 0 && self.duration > 0
    }
}

/// An undirected connection between two cities, with a fare per mode.
///
/// The same `Edge` value is shared by both endpoints in the graph, so the
/// two directions always agree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Edge {
    bus: Fare,
    train: Fare,
    plane: Fare,
}

impl Edge {
    /// Create an edge where no mode is available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one mode's fare.
    pub fn with(mut self, mode: TransportMode, price: u64, duration: u64) -> Self {
        *self.fare_mut(mode) = Fare::new(price, duration);
        self
    }

    /// The fare for `mode`, usable or not.
    pub fn fare(&self, mode: TransportMode) -> Fare {
        match mode {
            TransportMode::Bus => self.bus,
            TransportMode::Train => self.train,
            TransportMode::Plane => self.plane,
        }
    }

    fn fare_mut(&mut self, mode: TransportMode) -> &mut Fare {
        match mode {
            TransportMode::Bus => &mut self.bus,
            TransportMode::Train => &mut self.train,
            TransportMode::Plane => &mut self.plane,
        }
    }

    /// The fare for `mode` if the mode can be used on this edge.
    pub fn usable(&self, mode: TransportMode) -> Option<Fare> {
        Some(self.fare(mode)).filter(Fare::is_usable)
    }

    /// Modes usable on this edge, in `TransportMode::ALL` order.
    pub fn usable_modes(&self) -> impl Iterator<Item = TransportMode> + '_ {
        TransportMode::ALL
            .into_iter()
            .filter(|m| self.fare(*m).is_usable())
    }

    /// Read an edge from its document form:
    /// `{"price": {"bus": 100, ...}, "duration": {"bus": 60, ...}}`.
    ///
    /// Missing modes default to 0 (unavailable). Returns `Err` with a reason
    /// when `price` or `duration` is not a per-mode mapping.
    pub fn from_document(value: &Value) -> Result<Self, &'static str> {
        let obj = value.as_object().ok_or("edge data is not an object")?;
        let prices = obj
            .get("price")
            .and_then(Value::as_object)
            .ok_or("price is not a per-mode mapping")?;
        let durations = obj
            .get("duration")
            .and_then(Value::as_object)
            .ok_or("duration is not a per-mode mapping")?;

        let mut edge = Edge::new();
        for mode in TransportMode::ALL {
            let price = amount(prices.get(mode.as_str()), mode, "price");
            let duration = amount(durations.get(mode.as_str()), mode, "duration");
            *edge.fare_mut(mode) = Fare::new(price, duration);
        }
        Ok(edge)
    }
}

/// Read a non-negative integer amount, treating anything else as 0.
fn amount(value: Option<&Value>, mode: TransportMode, field: &str) -> u64 {
    match value {
        None | Some(Value::Null) => 0,
        Some(v) => v.as_u64().unwrap_or_else(|| {
            warn!(%mode, field, value = %v, "Ignoring non-integer amount, mode treated as unavailable");
            0
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_fares_unusable() {
        assert!(!Fare::new(0, 60).is_usable());
        assert!(!Fare::new(100, 0).is_usable());
        assert!(!Fare::default().is_usable());
        assert!(Fare::new(1, 1).is_usable());
    }

    #[test]
    fn builder_and_lookup() {
        let edge = Edge::new()
            .with(TransportMode::Bus, 100, 60)
            .with(TransportMode::Plane, 0, 45);

        assert_eq!(edge.usable(TransportMode::Bus), Some(Fare::new(100, 60)));
        assert_eq!(edge.usable(TransportMode::Train), None);
        assert_eq!(edge.usable(TransportMode::Plane), None);
        assert_eq!(edge.fare(TransportMode::Plane), Fare::new(0, 45));

        let modes: Vec<_> = edge.usable_modes().collect();
        assert_eq!(modes, [TransportMode::Bus]);
    }

    #[test]
    fn from_document_defaults_missing_modes() {
        let value = json!({
            "price": {"train": 500},
            "duration": {"train": 240, "bus": 300}
        });
        let edge = Edge::from_document(&value).unwrap();

        assert_eq!(edge.fare(TransportMode::Train), Fare::new(500, 240));
        assert_eq!(edge.fare(TransportMode::Bus), Fare::new(0, 300));
        assert_eq!(edge.fare(TransportMode::Plane), Fare::default());
        assert_eq!(edge.usable_modes().collect::<Vec<_>>(), [TransportMode::Train]);
    }

    #[test]
    fn from_document_rejects_bad_shape() {
        assert!(Edge::from_document(&json!(42)).is_err());
        assert!(Edge::from_document(&json!({"price": 100, "duration": {}})).is_err());
        assert!(Edge::from_document(&json!({"price": {}})).is_err());
        assert!(Edge::from_document(&json!({"duration": {"bus": 1}})).is_err());
    }

    #[test]
    fn from_document_treats_bad_amounts_as_unavailable() {
        let value = json!({
            "price": {"bus": -5, "train": "cheap", "plane": 2500},
            "duration": {"bus": 60, "train": 90, "plane": 1.5}
        });
        let edge = Edge::from_document(&value).unwrap();

        assert_eq!(edge.fare(TransportMode::Bus), Fare::new(0, 60));
        assert_eq!(edge.fare(TransportMode::Train), Fare::new(0, 90));
        assert_eq!(edge.fare(TransportMode::Plane), Fare::new(2500, 0));
        assert_eq!(edge.usable_modes().count(), 0);
    }
}
