//! # Routes
//!
//! Axum router configuration for the shop API.
//! Paths mirror the controller surface this service replaces.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use shop_core::CartRegistry;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tower_sessions::{cookie::time::Duration, Expiry, MemoryStore, SessionManagerLayer};
use tracing::debug;

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "shop_session";

/// Session expiry on inactivity, in minutes
const SESSION_EXPIRY_MINUTES: i64 = 30;

/// How often the registry is swept for expired-session carts, in seconds
const CART_SWEEP_INTERVAL_SECS: u64 = 60;

/// Reclaim carts whose session has expired.
///
/// Sessions expire after `SESSION_EXPIRY_MINUTES` of inactivity, at which
/// point the cart id they held can never be presented again. This sweep
/// drops those carts from the registry so it does not grow unbounded.
pub fn spawn_cart_sweeper(carts: CartRegistry) {
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(CART_SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let cutoff = chrono::Utc::now() - chrono::Duration::minutes(SESSION_EXPIRY_MINUTES);
            let evicted = carts.evict_older_than(cutoff);
            if evicted > 0 {
                debug!("Evicted {} expired-session carts", evicted);
            }
        }
    });
}

/// Create the main application router
///
/// Routes:
/// - Catalog:
///   - GET /Product?page=<int>&pageSize=<int> - One page of products
///
/// - Cart (session-scoped):
///   - GET  /Cart - Cart contents and order total
///   - GET  /Cart/GetCartCount - Sum of item quantities
///   - GET  /Cart/GetProductQuantity?productId=<int> - Quantity of one product
///   - POST /Cart/AddToCart?productId=<int> - Add one unit
///   - POST /Cart/RemoveFromCart?productId=<int> - Remove one unit
///
/// - GET /health - Health check
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // In-memory sessions; carts only outlive a session via the registry,
    // never past a process restart
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(state.config.is_production())
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            SESSION_EXPIRY_MINUTES,
        )));

    let cart_routes = Router::new()
        .route("/", get(handlers::get_cart))
        .route("/GetCartCount", get(handlers::get_cart_count))
        .route("/GetProductQuantity", get(handlers::get_product_quantity))
        .route("/AddToCart", post(handlers::add_to_cart))
        .route("/RemoveFromCart", post(handlers::remove_from_cart));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Catalog
        .route("/Product", get(handlers::list_products))
        // Cart
        .nest("/Cart", cart_routes)
        // Middleware
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
