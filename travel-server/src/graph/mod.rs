//! Travel graph model.
//!
//! Cities connected by undirected, multi-modal edges. A graph is built once
//! from a JSON document, normalized and symmetrized, and then shared
//! read-only across any number of searches.
//!
//! The document is keyed by city name. Each city maps neighbor names to edge
//! data and may carry `lat`/`lon` coordinates:
//!
//! ```json
//! {
//!   "Mumbai": {
//!     "lat": 19.07, "lon": 72.87,
//!     "Pune": {"price": {"bus": 400}, "duration": {"bus": 180}}
//!   }
//! }
//! ```

mod edge;
mod error;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::{City, GeoPoint};

pub use edge::{Edge, Fare};
pub use error::GraphError;

/// Keys on a city entry that hold coordinates rather than neighbors.
const COORDINATE_KEYS: [&str; 2] = ["lat", "lon"];

#[derive(Debug, Clone)]
struct CityNode {
    city: City,
    location: Option<GeoPoint>,
    neighbors: Vec<(City, Arc<Edge>)>,
}

impl CityNode {
    fn new(city: City) -> Self {
        Self {
            city,
            location: None,
            neighbors: Vec::new(),
        }
    }

    fn has_neighbor(&self, city: &City) -> bool {
        self.neighbors.iter().any(|(n, _)| n == city)
    }
}

/// An immutable, symmetric travel graph.
///
/// # Invariants
///
/// - If A lists B as a neighbor, B lists A, and both point at the same `Edge`
/// - No city lists itself
/// - City and neighbor order is deterministic (document order)
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<CityNode>,
    index: HashMap<City, usize>,
}

impl Graph {
    /// Parse and normalize a graph from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_value(&document)
    }

    /// Normalize an already-parsed graph document.
    pub fn from_value(document: &Value) -> Result<Self, GraphError> {
        normalize(document)
    }

    /// Read, parse and normalize a graph file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Returns true if `city` is a node of this graph.
    pub fn contains(&self, city: &str) -> bool {
        self.index.contains_key(city)
    }

    /// All cities, in document order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.nodes.iter().map(|n| &n.city)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// Neighbors of `city` with their shared edge data.
    ///
    /// Returns an empty slice for unknown cities.
    pub fn neighbors(&self, city: &str) -> &[(City, Arc<Edge>)] {
        match self.node(city) {
            Some(node) => &node.neighbors,
            None => &[],
        }
    }

    /// The edge between two cities, if any. Order of arguments does not matter.
    pub fn edge(&self, from: &str, to: &str) -> Option<&Arc<Edge>> {
        self.neighbors(from)
            .iter()
            .find(|(n, _)| n.as_str() == to)
            .map(|(_, e)| e)
    }

    /// Coordinates of `city`, if the document provided them.
    pub fn location(&self, city: &str) -> Option<GeoPoint> {
        self.node(city).and_then(|n| n.location)
    }

    fn node(&self, city: &str) -> Option<&CityNode> {
        self.index.get(city).map(|&i| &self.nodes[i])
    }

    fn node_index(&mut self, city: &City) -> usize {
        if let Some(&i) = self.index.get(city) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(CityNode::new(city.clone()));
        self.index.insert(city.clone(), i);
        i
    }
}

/// Normalize a raw graph document into a symmetric `Graph`.
///
/// Malformed edges are logged and skipped; their cities still exist. Missing
/// per-mode prices and durations default to 0 (mode unavailable). An edge
/// declared only from one side is mirrored onto the other side, sharing the
/// same `Edge` value. When both sides declare it, the first declaration in
/// document order wins.
///
/// The only hard failure is a document that is not an object.
pub fn normalize(document: &Value) -> Result<Graph, GraphError> {
    let entries = document.as_object().ok_or(GraphError::NotAnObject)?;

    let mut graph = Graph::default();
    let mut shared: HashMap<(City, City), Arc<Edge>> = HashMap::new();
    let mut declared: Vec<(City, City)> = Vec::new();
    let mut skipped = 0usize;

    // First pass: every declared city and its own valid edges, in order.
    for (name, entry) in entries {
        let city = match City::parse(name) {
            Ok(c) => c,
            Err(e) => {
                warn!(name = %name, error = %e, "Skipping city with invalid name");
                continue;
            }
        };
        let idx = graph.node_index(&city);

        let Some(fields) = entry.as_object() else {
            warn!(city = %city, "City entry is not an object, keeping it without neighbors");
            continue;
        };
        graph.nodes[idx].location = location(fields);

        for (key, data) in fields {
            if COORDINATE_KEYS.contains(&key.as_str()) {
                continue;
            }

            let neighbor = match City::parse(key) {
                Ok(n) => n,
                Err(e) => {
                    warn!(from = %city, to = %key, error = %e, "Skipping edge to invalid city name");
                    skipped += 1;
                    continue;
                }
            };
            if neighbor == city {
                warn!(city = %city, "Skipping self-loop edge");
                skipped += 1;
                continue;
            }

            let edge = match Edge::from_document(data) {
                Ok(e) => e,
                Err(reason) => {
                    warn!(from = %city, to = %neighbor, reason, "Skipping malformed edge");
                    skipped += 1;
                    continue;
                }
            };

            let pair = pair_key(&city, &neighbor);
            let edge = match shared.get(&pair) {
                Some(existing) => {
                    if **existing != edge {
                        warn!(
                            from = %city,
                            to = %neighbor,
                            "Reciprocal edge disagrees with earlier declaration, keeping the earlier one"
                        );
                    }
                    existing.clone()
                }
                None => {
                    let edge = Arc::new(edge);
                    shared.insert(pair, edge.clone());
                    edge
                }
            };

            graph.nodes[idx].neighbors.push((neighbor.clone(), edge));
            declared.push((city.clone(), neighbor));
        }
    }

    // Second pass: mirror one-sided declarations onto the other endpoint.
    for (city, neighbor) in declared {
        let edge = shared[&pair_key(&city, &neighbor)].clone();
        let idx = graph.node_index(&neighbor);
        let node = &mut graph.nodes[idx];
        if !node.has_neighbor(&city) {
            node.neighbors.push((city, edge));
        }
    }

    debug!(
        cities = graph.len(),
        edges = graph.edge_count(),
        skipped,
        "Graph normalized"
    );

    Ok(graph)
}

fn pair_key(a: &City, b: &City) -> (City, City) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

fn location(fields: &Map<String, Value>) -> Option<GeoPoint> {
    let lat = fields.get("lat").and_then(Value::as_f64)?;
    let lon = fields.get("lon").and_then(Value::as_f64)?;
    Some(GeoPoint { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;
    use serde_json::json;

    fn bus(price: u64, duration: u64) -> Value {
        json!({"price": {"bus": price}, "duration": {"bus": duration}})
    }

    fn names(graph: &Graph, city: &str) -> Vec<String> {
        graph
            .neighbors(city)
            .iter()
            .map(|(n, _)| n.to_string())
            .collect()
    }

    #[test]
    fn one_sided_edge_is_mirrored() {
        let graph = normalize(&json!({
            "A": {"B": bus(100, 60)},
            "B": {}
        }))
        .unwrap();

        let ab = graph.edge("A", "B").unwrap();
        let ba = graph.edge("B", "A").unwrap();
        assert!(Arc::ptr_eq(ab, ba));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn neighbor_only_city_is_created_last() {
        let graph = normalize(&json!({
            "A": {"C": bus(1, 1)},
            "B": {"A": bus(2, 2)}
        }))
        .unwrap();

        let cities: Vec<&str> = graph.cities().map(City::as_str).collect();
        assert_eq!(cities, ["A", "B", "C"]);
        assert_eq!(names(&graph, "A"), ["C", "B"]);
        assert_eq!(names(&graph, "C"), ["A"]);
    }

    #[test]
    fn reciprocal_declarations_share_first_edge() {
        let graph = normalize(&json!({
            "A": {"B": bus(100, 60)},
            "B": {"A": bus(999, 999)}
        }))
        .unwrap();

        let ab = graph.edge("A", "B").unwrap();
        let ba = graph.edge("B", "A").unwrap();
        assert!(Arc::ptr_eq(ab, ba));
        assert_eq!(ab.fare(TransportMode::Bus), Fare::new(100, 60));
        assert_eq!(names(&graph, "B"), ["A"]);
    }

    #[test]
    fn missing_modes_default_to_unavailable() {
        let graph = normalize(&json!({
            "A": {"B": {"price": {"train": 300}, "duration": {"train": 120}}}
        }))
        .unwrap();

        let edge = graph.edge("A", "B").unwrap();
        assert_eq!(edge.fare(TransportMode::Bus), Fare::default());
        assert_eq!(edge.fare(TransportMode::Plane), Fare::default());
        assert!(edge.usable(TransportMode::Train).is_some());
    }

    #[test]
    fn malformed_edge_is_skipped_but_city_kept() {
        let graph = normalize(&json!({
            "A": {"B": {"price": 100, "duration": 60}, "C": bus(1, 1)},
            "B": {}
        }))
        .unwrap();

        assert!(graph.contains("B"));
        assert!(graph.edge("A", "B").is_none());
        assert!(graph.neighbors("B").is_empty());
        assert!(graph.edge("A", "C").is_some());
    }

    #[test]
    fn malformed_edge_to_unknown_city_creates_nothing() {
        let graph = normalize(&json!({
            "A": {"Z": {"price": {"bus": 1}}}
        }))
        .unwrap();

        assert!(!graph.contains("Z"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn malformed_reverse_declaration_falls_back_to_mirror() {
        let graph = normalize(&json!({
            "A": {"B": bus(100, 60)},
            "B": {"A": "broken"}
        }))
        .unwrap();

        assert!(graph.edge("B", "A").is_some());
    }

    #[test]
    fn coordinates_are_not_neighbors() {
        let graph = normalize(&json!({
            "Mumbai": {"lat": 19.07, "lon": 72.87, "Pune": bus(400, 180)},
            "Pune": {"lat": 18.52}
        }))
        .unwrap();

        assert_eq!(names(&graph, "Mumbai"), ["Pune"]);
        assert_eq!(
            graph.location("Mumbai"),
            Some(GeoPoint {
                lat: 19.07,
                lon: 72.87
            })
        );
        assert_eq!(graph.location("Pune"), None);
        assert_eq!(graph.location("Nowhere"), None);
    }

    #[test]
    fn self_loops_are_skipped() {
        let graph = normalize(&json!({"A": {"A": bus(1, 1)}})).unwrap();
        assert!(graph.neighbors("A").is_empty());
    }

    #[test]
    fn non_object_city_entry_keeps_city() {
        let graph = normalize(&json!({"A": [1, 2, 3], "B": {"A": bus(5, 5)}})).unwrap();

        assert!(graph.contains("A"));
        assert_eq!(names(&graph, "A"), ["B"]);
    }

    #[test]
    fn non_object_document_is_an_error() {
        assert!(matches!(normalize(&json!([1, 2])), Err(GraphError::NotAnObject)));
    }

    #[test]
    fn unknown_city_has_no_neighbors() {
        let graph = Graph::default();
        assert!(graph.is_empty());
        assert!(graph.neighbors("A").is_empty());
        assert!(graph.edge("A", "B").is_none());
    }

    #[test]
    fn from_json_str_reports_invalid_json() {
        assert!(matches!(
            Graph::from_json_str("{not json"),
            Err(GraphError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.json");
        std::fs::write(&path, json!({"A": {"B": bus(10, 20)}}).to_string()).unwrap();

        let graph = Graph::load(&path).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Graph::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(GraphError::Io { .. })));
    }

    #[test]
    fn loading_is_idempotent() {
        let doc = json!({
            "A": {"B": bus(100, 60), "C": bus(150, 90)},
            "B": {"C": bus(100, 60)}
        });
        let first = normalize(&doc).unwrap();
        let second = normalize(&doc).unwrap();

        for city in first.cities() {
            assert_eq!(names(&first, city.as_str()), names(&second, city.as_str()));
            for (neighbor, edge) in first.neighbors(city.as_str()) {
                let other = second.edge(city.as_str(), neighbor.as_str()).unwrap();
                assert_eq!(**edge, **other);
            }
        }
    }
}
