//! # Mini-Shop RS
//!
//! Minimal e-commerce demo: remote catalog, pagination, session carts.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a different catalog
//! export CATALOG_API_URL=https://fakestoreapi.com/products
//!
//! # Run the server
//! mini-shop
//! ```

use shop_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Product source: {}", state.source.source_name());

    // Reclaim carts left behind by expired sessions
    routes::spawn_cart_sweeper(state.carts.clone());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Mini-Shop starting on http://{}", addr);

    if !is_prod {
        info!("Catalog: GET http://{}/Product?page=1&pageSize=5", addr);
        info!("Cart: GET http://{}/Cart", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
