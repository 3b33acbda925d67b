//! HTTP server configuration sourced from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Listen address used when `WORLDMARK_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
/// Area registry file used when `WORLDMARK_GEOJSON` is unset.
pub const DEFAULT_GEOJSON_PATH: &str = "static/countries.geojson";

/// Failures raised while reading the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured listen address did not parse as `host:port`.
    #[error("invalid listen address {addr:?}: {source}")]
    InvalidAddr {
        /// The raw value that failed to parse.
        addr: String,
        /// The underlying parse failure.
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
    /// Path to the GeoJSON file seeding the area registry.
    pub geojson_path: PathBuf,
}

impl ServerConfig {
    /// Read the configuration from `WORLDMARK_ADDR` and `WORLDMARK_GEOJSON`,
    /// falling back to the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddr`] when the address does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var("WORLDMARK_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let geojson_path = std::env::var("WORLDMARK_GEOJSON")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_GEOJSON_PATH));
        Self::from_parts(&addr, geojson_path)
    }

    fn from_parts(addr: &str, geojson_path: PathBuf) -> Result<Self, ConfigError> {
        let bind_addr = addr.parse().map_err(|source| ConfigError::InvalidAddr {
            addr: addr.to_owned(),
            source,
        })?;
        Ok(Self {
            bind_addr,
            geojson_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = ServerConfig::from_parts(DEFAULT_BIND_ADDR, PathBuf::from(DEFAULT_GEOJSON_PATH))
            .expect("default address parses");
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.geojson_path, PathBuf::from(DEFAULT_GEOJSON_PATH));
    }

    #[test]
    fn malformed_addresses_are_reported() {
        let error = ServerConfig::from_parts("not-an-address", PathBuf::new())
            .expect_err("malformed address must fail");
        assert!(matches!(error, ConfigError::InvalidAddr { .. }));
    }
}
