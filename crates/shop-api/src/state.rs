//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the product source, the cart registry, and configuration.

use shop_catalog::HttpProductSource;
use shop_core::{BoxedProductSource, CartRegistry};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Current product listing supplier
    pub source: BoxedProductSource,
    /// Live carts, one per session
    pub carts: CartRegistry,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the remote catalog
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let source = HttpProductSource::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize catalog client: {}", e))?;

        Ok(Self {
            source: Arc::new(source) as BoxedProductSource,
            carts: CartRegistry::new(),
            config,
        })
    }

    /// Create state with an explicit product source (for testing)
    pub fn with_source(source: BoxedProductSource, config: AppConfig) -> Self {
        Self {
            source,
            carts: CartRegistry::new(),
            config,
        }
    }
}
