//! # shop-catalog
//!
//! Remote product catalog integration for mini-shop-rs.
//!
//! The catalog is a third-party REST endpoint serving a JSON array of
//! products. `HttpProductSource` implements the `ProductSource` trait
//! from `shop-core` against it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop_catalog::HttpProductSource;
//! use shop_core::ProductSource;
//!
//! // Reads CATALOG_API_URL / CATALOG_TIMEOUT_SECS from the environment
//! let source = HttpProductSource::from_env()?;
//!
//! // Never fails: empty listing on any upstream problem
//! let products = source.fetch_products().await;
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::HttpProductSource;
pub use config::CatalogConfig;
