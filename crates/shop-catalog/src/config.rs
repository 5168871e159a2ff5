//! # Catalog Configuration
//!
//! Configuration for the remote catalog endpoint.
//! Loaded from environment variables, with the public demo catalog as
//! the default.

use shop_core::{ShopError, ShopResult};
use std::env;

/// Default catalog endpoint (public demo store)
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com/products";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Full URL of the product listing endpoint
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `CATALOG_API_URL` (default: the public demo catalog)
    /// - `CATALOG_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> ShopResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url =
            env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ShopError::Configuration(format!(
                "CATALOG_API_URL must be an http(s) URL, got: {}",
                api_url
            )));
        }

        let timeout_secs = match env::var("CATALOG_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ShopError::Configuration(format!(
                    "CATALOG_TIMEOUT_SECS must be an integer, got: {}",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            timeout_secs,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Builder: set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = CatalogConfig::new("http://localhost:9000/products").with_timeout_secs(5);

        assert_eq!(config.api_url, "http://localhost:9000/products");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_default_points_at_demo_catalog() {
        let config = CatalogConfig::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
