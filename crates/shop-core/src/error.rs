//! # Shop Error Types
//!
//! Typed error handling for the mini-shop engine.
//! All fallible shop operations return `Result<T, ShopError>`.

use thiserror::Error;

/// Core error type for all shop operations
#[derive(Debug, Error)]
pub enum ShopError {
    /// Configuration errors (missing env vars, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Catalog endpoint returned a non-success status
    #[error("Catalog error: HTTP {status}: {message}")]
    CatalogStatus { status: u16, message: String },

    /// Network/HTTP error communicating with the catalog
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Session state unavailable or corrupted for this request
    #[error("Session error: {0}")]
    Session(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ShopError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ShopError::Configuration(_) => 500,
            ShopError::InvalidRequest(_) => 400,
            ShopError::CatalogStatus { .. } => 502,
            ShopError::NetworkError(_) => 503,
            ShopError::Session(_) => 500,
            ShopError::Internal(_) => 500,
            ShopError::Serialization(_) => 500,
        }
    }

    /// Returns true if this error came from the upstream catalog.
    ///
    /// Catalog failures are recovered locally: the product source logs
    /// them and surfaces an empty listing instead of failing the request.
    pub fn is_catalog_failure(&self) -> bool {
        matches!(
            self,
            ShopError::CatalogStatus { .. }
                | ShopError::NetworkError(_)
                | ShopError::Serialization(_)
        )
    }
}

/// Result type alias for shop operations
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ShopError::InvalidRequest("test".into()).status_code(), 400);
        assert_eq!(
            ShopError::CatalogStatus {
                status: 500,
                message: "boom".into()
            }
            .status_code(),
            502
        );
        assert_eq!(ShopError::Session("no layer".into()).status_code(), 500);
    }

    #[test]
    fn test_catalog_failures_are_recoverable() {
        assert!(ShopError::NetworkError("timeout".into()).is_catalog_failure());
        assert!(ShopError::Serialization("bad json".into()).is_catalog_failure());
        assert!(!ShopError::Session("missing".into()).is_catalog_failure());
    }
}
