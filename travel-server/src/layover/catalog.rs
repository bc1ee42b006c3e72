//! Static per-city attraction catalog.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{Attraction, Category};

/// Errors that can occur when loading an attraction catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not a `{city: [attraction, ...]}` mapping
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only mapping from city name to its attractions, in declared order.
#[derive(Debug, Clone, Default)]
pub struct AttractionCatalog {
    entries: HashMap<String, Vec<Attraction>>,
}

impl AttractionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add attractions for a city, after any already listed.
    pub fn add(&mut self, city: &str, attractions: impl IntoIterator<Item = Attraction>) {
        self.entries
            .entry(city.to_string())
            .or_default()
            .extend(attractions);
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: HashMap<String, Vec<Attraction>> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// The attractions of `city`, in declared order. Empty if unknown.
    pub fn attractions(&self, city: &str) -> &[Attraction] {
        match self.entries.get(city) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Number of cities with catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in catalog shipped with the server.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add(
            "Mumbai",
            [attraction(
                "Gateway of India",
                90,
                "Iconic monument by the sea.",
                Category::Landmark,
                0,
                4.7,
            )],
        );
        catalog.add(
            "Delhi",
            [attraction(
                "India Gate",
                90,
                "Iconic war memorial.",
                Category::Landmark,
                0,
                4.6,
            )],
        );
        catalog.add(
            "Ahmedabad",
            [attraction(
                "Sabarmati Ashram",
                120,
                "Historic site of Gandhi's residence.",
                Category::Historical,
                0,
                4.6,
            )],
        );
        catalog
    }
}

fn attraction(
    name: &str,
    duration: u32,
    description: &str,
    category: Category,
    cost: u32,
    rating: f32,
) -> Attraction {
    Attraction {
        name: name.to_string(),
        duration,
        description: description.to_string(),
        category,
        cost,
        rating,
    }
}
