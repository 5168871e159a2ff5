//! # Product Types
//!
//! Product catalog types for mini-shop.
//! Products are owned by the remote catalog and immutable once fetched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as served by the remote catalog.
///
/// The remote payload is consumed case-insensitively: some catalog
/// deployments serve `Id`/`Title`/`Price` instead of the lowercase
/// names. Fields beyond these three are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier assigned by the remote source
    #[serde(alias = "Id", alias = "ID")]
    pub id: u64,

    /// Display title
    #[serde(alias = "Title")]
    pub title: String,

    /// Unit price, non-negative
    #[serde(alias = "Price")]
    pub price: Decimal,
}

impl Product {
    /// Create a product with the given id, title, and price
    pub fn new(id: u64, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            title: title.into(),
            price,
        }
    }
}

/// Find a product by id in a fetched listing
pub fn find_product(products: &[Product], product_id: u64) -> Option<&Product> {
    products.iter().find(|p| p.id == product_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_deserialize_lowercase_payload() {
        let json = r#"{"id": 1, "title": "Backpack", "price": 109.95}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Backpack");
        assert_eq!(product.price, price("109.95"));
    }

    #[test]
    fn test_deserialize_pascal_case_payload() {
        let json = r#"{"Id": 2, "Title": "T-Shirt", "Price": 22.3}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 2);
        assert_eq!(product.title, "T-Shirt");
        assert_eq!(product.price, price("22.3"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"id": 3, "title": "Jacket", "price": 55.99, "category": "men's clothing", "image": "https://example.com/3.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 3);
    }

    #[test]
    fn test_find_product() {
        let products = vec![
            Product::new(1, "One", Decimal::new(1000, 2)),
            Product::new(2, "Two", Decimal::new(1500, 2)),
        ];

        assert_eq!(find_product(&products, 2).map(|p| p.id), Some(2));
        assert!(find_product(&products, 99).is_none());
    }
}
