//! # shop-api
//!
//! HTTP API layer for mini-shop-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Catalog endpoint with offset pagination
//! - Session-scoped cart endpoints
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/Product` | One page of the catalog |
//! | GET | `/Cart` | Cart contents and total |
//! | GET | `/Cart/GetCartCount` | Sum of item quantities |
//! | GET | `/Cart/GetProductQuantity` | Quantity of one product |
//! | POST | `/Cart/AddToCart` | Add one unit of a product |
//! | POST | `/Cart/RemoveFromCart` | Remove one unit of a product |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
