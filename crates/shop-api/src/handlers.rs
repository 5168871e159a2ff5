//! # Request Handlers
//!
//! Axum request handlers for the shop API.
//! Catalog views go through the product source and pagination; cart
//! views go through the session's cart in the registry.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shop_core::{find_product, paginate, Cart, CartItem, CartRegistry, PageParams, Product, ShopError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_sessions::Session;
use tracing::{error, instrument};
use uuid::Uuid;

/// Session key holding this session's cart id
const CART_ID_SESSION_KEY: &str = "cart_id";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query carrying a product id (`?productId=<int>`)
#[derive(Debug, Deserialize)]
pub struct ProductIdQuery {
    /// Product id as sent by the client. Signed so any integer binds;
    /// the catalog never issues non-positive ids, so those fall out as
    /// not-found rather than a rejected request.
    #[serde(rename = "productId")]
    pub product_id: i64,
}

impl ProductIdQuery {
    /// The id as a catalog key, or `None` for ids no catalog entry can have
    fn catalog_id(&self) -> Option<u64> {
        u64::try_from(self.product_id).ok()
    }
}

/// One page of the catalog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageResponse {
    /// Products on this page
    pub products: Vec<Product>,
    /// Effective (clamped) page number
    pub page: usize,
    /// Total page count for the full listing
    pub total_pages: usize,
}

/// Full cart contents
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// Items in insertion order of first add
    pub items: Vec<CartItem>,
    /// Sum of (price x quantity) across all items
    pub total_price: Decimal,
    /// Sum of all item quantities
    pub cart_count: u32,
    /// When this session's cart was created
    pub created_at: DateTime<Utc>,
}

/// Cart count response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCountResponse {
    pub cart_count: u32,
}

/// Per-product quantity response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuantityResponse {
    pub product_quantity: u32,
}

/// Result of an add/remove mutation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMutationResponse {
    /// False when the product id was not found (catalog or cart)
    pub success: bool,
    /// Cart count after the mutation
    pub cart_count: u32,
    /// Quantity of the touched product after the mutation
    pub product_quantity: u32,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn shop_error_to_response(err: ShopError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Session / cart plumbing
// =============================================================================

/// Resolve the session's cart, minting a cart id on first use.
///
/// Cart contents live in the registry; the session stores only the id.
async fn cart_for_session(
    session: &Session,
    carts: &CartRegistry,
) -> Result<Arc<Mutex<Cart>>, (StatusCode, Json<ErrorResponse>)> {
    let cart_id: Option<String> = session
        .get(CART_ID_SESSION_KEY)
        .await
        .map_err(session_error)?;

    let cart_id = match cart_id {
        Some(id) => id,
        None => {
            let id = Uuid::new_v4().to_string();
            session
                .insert(CART_ID_SESSION_KEY, id.clone())
                .await
                .map_err(session_error)?;
            id
        }
    };

    Ok(carts.cart(&cart_id))
}

fn session_error(e: tower_sessions::session::Error) -> (StatusCode, Json<ErrorResponse>) {
    error!("Session store error: {}", e);
    shop_error_to_response(ShopError::Session(e.to_string()))
}

/// Lock a cart, recovering from a poisoned mutex
fn lock(cart: &Arc<Mutex<Cart>>) -> MutexGuard<'_, Cart> {
    cart.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Quantity of a product in the cart; ids outside the catalog key space
/// have quantity 0
fn quantity_of(cart: &Cart, product_id: Option<u64>) -> u32 {
    product_id.map(|id| cart.product_quantity(id)).unwrap_or(0)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "mini-shop",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// One page of the product catalog.
///
/// Re-fetches the full listing from the product source on every call;
/// an upstream failure shows up here as an empty catalog.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let products = state.source.fetch_products().await;

    let (page, page_size) = params.clamp();
    let (page_items, total_pages) = paginate(&products, page, page_size);

    Json(ProductPageResponse {
        products: page_items,
        page,
        total_pages,
    })
}

/// Current cart contents with the order total
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CartResponse>, (StatusCode, Json<ErrorResponse>)> {
    let cart = cart_for_session(&session, &state.carts).await?;
    let cart = lock(&cart);

    Ok(Json(CartResponse {
        items: cart.items().to_vec(),
        total_price: cart.total_price(),
        cart_count: cart.item_count(),
        created_at: cart.created_at,
    }))
}

/// Sum of all item quantities in the session's cart
pub async fn get_cart_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CartCountResponse>, (StatusCode, Json<ErrorResponse>)> {
    let cart = cart_for_session(&session, &state.carts).await?;
    let cart_count = lock(&cart).item_count();

    Ok(Json(CartCountResponse { cart_count }))
}

/// Quantity of one product in the session's cart (0 when absent)
pub async fn get_product_quantity(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductIdQuery>,
) -> Result<Json<ProductQuantityResponse>, (StatusCode, Json<ErrorResponse>)> {
    let cart = cart_for_session(&session, &state.carts).await?;
    let product_quantity = quantity_of(&lock(&cart), query.catalog_id());

    Ok(Json(ProductQuantityResponse { product_quantity }))
}

/// Add one unit of a product to the session's cart.
///
/// The id is validated against the product source's current listing;
/// an unknown id yields `success: false` with no mutation. The whole
/// read-modify-write runs under the cart's lock.
#[instrument(skip(state, session, query), fields(product_id = query.product_id))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductIdQuery>,
) -> Result<Json<CartMutationResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Fetch before taking the cart lock; the lookup needs no cart state
    let products = state.source.fetch_products().await;
    let product = query
        .catalog_id()
        .and_then(|id| find_product(&products, id).cloned());

    let cart = cart_for_session(&session, &state.carts).await?;
    let mut cart = lock(&cart);

    let success = match product {
        Some(product) => {
            cart.add(product);
            true
        }
        None => false,
    };

    Ok(Json(CartMutationResponse {
        success,
        cart_count: cart.item_count(),
        product_quantity: quantity_of(&cart, query.catalog_id()),
    }))
}

/// Remove one unit of a product from the session's cart.
///
/// Decrements the quantity, dropping the item at 0; an id not in the
/// cart yields `success: false` with no mutation.
#[instrument(skip(state, session, query), fields(product_id = query.product_id))]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductIdQuery>,
) -> Result<Json<CartMutationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let cart = cart_for_session(&session, &state.carts).await?;
    let mut cart = lock(&cart);

    let success = match query.catalog_id() {
        Some(id) => cart.remove(id),
        None => false,
    };

    Ok(Json(CartMutationResponse {
        success,
        cart_count: cart.item_count(),
        product_quantity: quantity_of(&cart, query.catalog_id()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
    }

    #[test]
    fn test_shop_error_conversion() {
        let err = ShopError::InvalidRequest("Bad data".to_string());
        let (status, _json) = shop_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_catalog_id_rejects_non_positive() {
        assert_eq!(ProductIdQuery { product_id: 3 }.catalog_id(), Some(3));
        assert_eq!(ProductIdQuery { product_id: 0 }.catalog_id(), Some(0));
        assert_eq!(ProductIdQuery { product_id: -1 }.catalog_id(), None);
    }

    #[test]
    fn test_mutation_response_field_names() {
        let response = CartMutationResponse {
            success: true,
            cart_count: 3,
            product_quantity: 2,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "cartCount": 3, "productQuantity": 2 })
        );
    }
}
