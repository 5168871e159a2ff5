//! # HTTP Product Source
//!
//! Catalog client backed by the remote product API.
//!
//! Every call re-fetches the full listing; there is no cache and no
//! retry. Upstream failures never reach the caller: the source logs the
//! failure and serves an empty listing instead.

use crate::config::CatalogConfig;
use async_trait::async_trait;
use reqwest::Client;
use shop_core::{Product, ProductSource, ShopError, ShopResult};
use tracing::{debug, error, instrument};

/// Product source backed by the remote catalog endpoint
pub struct HttpProductSource {
    config: CatalogConfig,
    client: Client,
}

impl HttpProductSource {
    /// Create a new catalog client
    pub fn new(config: CatalogConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> ShopResult<Self> {
        let config = CatalogConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Fetch the listing, surfacing failures.
    ///
    /// `fetch_products` wraps this with the recover-to-empty policy;
    /// tests and diagnostics can call it directly to see the error.
    pub async fn try_fetch(&self) -> ShopResult<Vec<Product>> {
        let response = self
            .client
            .get(&self.config.api_url)
            .send()
            .await
            .map_err(|e| ShopError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShopError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            return Err(ShopError::CatalogStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let products: Vec<Product> = serde_json::from_str(&body).map_err(|e| {
            ShopError::Serialization(format!("Failed to parse catalog response: {}", e))
        })?;

        debug!("Fetched {} products from {}", products.len(), self.config.api_url);

        Ok(products)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    #[instrument(skip(self), fields(api_url = %self.config.api_url))]
    async fn fetch_products(&self) -> Vec<Product> {
        match self.try_fetch().await {
            Ok(products) => products,
            Err(e) => {
                error!("Error fetching products: {}", e);
                Vec::new()
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> HttpProductSource {
        let config =
            CatalogConfig::new(format!("{}/products", server.uri())).with_timeout_secs(2);
        HttpProductSource::new(config)
    }

    #[tokio::test]
    async fn test_fetch_parses_listing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "title": "Backpack", "price": 109.95, "category": "bags" },
                { "id": 2, "title": "T-Shirt", "price": 22.3 }
            ])))
            .mount(&server)
            .await;

        let products = source_for(&server).fetch_products().await;

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].title, "Backpack");
        assert_eq!(products[1].price, "22.3".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn test_server_error_yields_empty_listing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let source = source_for(&server);

        assert!(source.fetch_products().await.is_empty());

        // The inner fetch still reports the status for diagnostics
        let err = source.try_fetch().await.unwrap_err();
        assert!(matches!(err, ShopError::CatalogStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_payload_yields_empty_listing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let source = source_for(&server);

        assert!(source.fetch_products().await.is_empty());
        assert!(matches!(
            source.try_fetch().await.unwrap_err(),
            ShopError::Serialization(_)
        ));
    }

    #[tokio::test]
    async fn test_connection_error_yields_empty_listing() {
        // Point at a server that is no longer there
        let server = MockServer::start().await;
        let source = source_for(&server);
        drop(server);

        assert!(source.fetch_products().await.is_empty());
        assert!(matches!(
            source.try_fetch().await.unwrap_err(),
            ShopError::NetworkError(_)
        ));
    }

    #[tokio::test]
    async fn test_refetches_on_every_call() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(3)
            .mount(&server)
            .await;

        let source = source_for(&server);
        for _ in 0..3 {
            source.fetch_products().await;
        }
    }
}
