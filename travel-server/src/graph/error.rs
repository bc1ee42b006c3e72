//! Graph loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a travel graph.
///
/// Only whole-document problems are errors. Malformed edges are skipped
/// during normalization and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Graph file could not be read
    #[error("failed to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON
    #[error("invalid JSON in graph document: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is not a mapping of cities
    #[error("graph document must be an object keyed by city name")]
    NotAnObject,
}
