//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::cache::CacheConfig;

/// Path of the graph document when `TRAVEL_GRAPH_PATH` is unset.
pub const DEFAULT_GRAPH_PATH: &str = "cities.json";

/// Address to listen on when `TRAVEL_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    3000,
);

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Graph document to serve searches from.
    pub graph_path: PathBuf,

    /// Attraction catalog file. `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    pub bind_addr: SocketAddr,

    /// Graph cache settings.
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from(DEFAULT_GRAPH_PATH),
            catalog_path: None,
            bind_addr: DEFAULT_BIND_ADDR,
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables take their defaults; unparseable ones are warned about
    /// and also take their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("TRAVEL_GRAPH_PATH").filter(|p| !p.is_empty()) {
            config.graph_path = PathBuf::from(path);
        }

        config.catalog_path = lookup("TRAVEL_CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        if let Some(addr) = lookup("TRAVEL_BIND_ADDR") {
            match addr.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warn!(value = %addr, error = %e, "Ignoring invalid TRAVEL_BIND_ADDR"),
            }
        }

        if let Some(secs) = lookup("TRAVEL_GRAPH_TTL_SECS") {
            match secs.parse() {
                Ok(secs) => config.cache.ttl = Duration::from_secs(secs),
                Err(e) => warn!(value = %secs, error = %e, "Ignoring invalid TRAVEL_GRAPH_TTL_SECS"),
            }
        }

        config
    }
}
