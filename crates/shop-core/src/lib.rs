//! # shop-core
//!
//! Core types and logic for the mini-shop engine.
//!
//! This crate provides:
//! - `Product` and the `ProductSource` trait for the catalog seam
//! - `Cart`, `CartItem`, and `CartRegistry` for session-scoped carts
//! - `paginate` and `PageParams` for offset pagination
//! - `ShopError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use shop_core::{Cart, CartRegistry, paginate, Product};
//!
//! // One locked cart per session id
//! let registry = CartRegistry::new();
//! let cart = registry.cart("session-123");
//!
//! // Mutate under the cart's own lock
//! let mut cart = cart.lock().unwrap();
//! cart.add(product);
//! assert_eq!(cart.product_quantity(product_id), 1);
//!
//! // Page over a fetched listing
//! let (page_items, total_pages) = paginate(&products, 1, 5);
//! ```

pub mod cart;
pub mod error;
pub mod page;
pub mod product;
pub mod source;

// Re-exports for convenience
pub use cart::{Cart, CartItem, CartRegistry};
pub use error::{ShopError, ShopResult};
pub use page::{paginate, PageParams, DEFAULT_PAGE_SIZE};
pub use product::{find_product, Product};
pub use source::{BoxedProductSource, ProductSource, StaticProductSource};
