//! # Product Source Trait
//!
//! Seam between the shop and whatever serves the catalog.
//! Implementations: the HTTP catalog client in `shop-catalog`, fixed
//! in-memory listings in tests.

use crate::product::Product;
use async_trait::async_trait;
use std::sync::Arc;

/// Supplier of the current product listing.
///
/// The contract is total: a source always yields a listing, never an
/// error. Implementations recover from upstream failures internally
/// (logging them) and return an empty listing instead.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the current catalog. Empty on any upstream failure.
    async fn fetch_products(&self) -> Vec<Product>;

    /// Source name (for logging)
    fn source_name(&self) -> &'static str;
}

/// Type alias for a shared product source (dynamic dispatch)
pub type BoxedProductSource = Arc<dyn ProductSource>;

/// Fixed in-memory product source.
///
/// Serves a listing handed to it at construction; useful for tests and
/// for running the API without the remote catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticProductSource {
    products: Vec<Product>,
}

impl StaticProductSource {
    /// Create a source serving the given listing
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    async fn fetch_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_static_source_serves_fixed_listing() {
        let source = StaticProductSource::new(vec![
            Product::new(1, "One", Decimal::new(1000, 2)),
            Product::new(2, "Two", Decimal::new(1500, 2)),
        ]);

        let products = source.fetch_products().await;
        assert_eq!(products.len(), 2);
        assert_eq!(source.source_name(), "static");
    }

    #[tokio::test]
    async fn test_default_static_source_is_empty() {
        let source = StaticProductSource::default();
        assert!(source.fetch_products().await.is_empty());
    }
}
