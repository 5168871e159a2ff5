//! # Cart Types
//!
//! Shopping cart types for mini-shop.
//!
//! A `Cart` is a session-scoped, insertion-ordered collection of
//! `CartItem`s with at most one item per product id. Carts live in a
//! `CartRegistry`, which hands out one `Arc<Mutex<Cart>>` per cart id so
//! every read-modify-write mutation happens under a single lock.

use crate::product::Product;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A product with its selected quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// The product being purchased
    pub product: Product,

    /// Selected quantity, always >= 1; an item that would reach 0 is
    /// removed from the cart instead
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart item with quantity 1
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line total (unit price x quantity)
    pub fn total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// A session-scoped shopping cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Items in insertion order of first add
    items: Vec<CartItem>,

    /// When this cart was created
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity of an existing item, or appends a new
    /// item with quantity 1. Catalog membership is the caller's concern;
    /// the cart accepts any product handed to it.
    pub fn add(&mut self, product: Product) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::new(product)),
        }
    }

    /// Remove one unit of a product.
    ///
    /// Decrements the quantity, removing the item entirely when it would
    /// drop to 0. Returns `false` (with no mutation) when the product is
    /// not in the cart.
    pub fn remove(&mut self, product_id: u64) -> bool {
        let Some(pos) = self.items.iter().position(|i| i.product.id == product_id) else {
            return false;
        };

        if self.items[pos].quantity > 1 {
            self.items[pos].quantity -= 1;
        } else {
            self.items.remove(pos);
        }
        true
    }

    /// Current cart contents, in insertion order of first add
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of all item quantities (not the number of distinct products)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Quantity of the given product, or 0 if absent
    pub fn product_quantity(&self, product_id: u64) -> u32 {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Sum of (price x quantity) across all items
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(|i| i.total()).sum()
    }

    /// Check if the cart has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A registry slot: the cart plus the last time a request touched it
#[derive(Debug)]
struct CartEntry {
    cart: Arc<Mutex<Cart>>,
    touched_at: DateTime<Utc>,
}

/// Registry of live carts, keyed by session cart id.
///
/// Each cart is wrapped in its own mutex; holding that lock for the whole
/// read-modify-write of an add/remove closes the lost-update race between
/// concurrent requests on the same session.
///
/// Every lookup refreshes the entry's last-touched stamp, and
/// `evict_older_than` reclaims carts whose session has gone quiet, so the
/// registry does not grow by one entry per session forever.
#[derive(Clone, Default)]
pub struct CartRegistry {
    carts: Arc<Mutex<HashMap<String, CartEntry>>>,
}

impl CartRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cart for the given id, creating an empty one on first use.
    ///
    /// Refreshes the id's last-touched stamp, keeping active carts out of
    /// reach of `evict_older_than`.
    pub fn cart(&self, cart_id: &str) -> Arc<Mutex<Cart>> {
        let mut carts = self
            .carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = carts
            .entry(cart_id.to_string())
            .or_insert_with(|| CartEntry {
                cart: Arc::new(Mutex::new(Cart::new())),
                touched_at: Utc::now(),
            });
        entry.touched_at = Utc::now();
        entry.cart.clone()
    }

    /// Drop every cart not touched since `cutoff`, returning how many were
    /// reclaimed.
    ///
    /// Sessions expire on inactivity; sweeping with a cutoff at least one
    /// session lifetime in the past drops exactly the carts whose ids no
    /// live session can still present.
    pub fn evict_older_than(&self, cutoff: DateTime<Utc>) -> usize {
        let mut carts = self
            .carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = carts.len();
        carts.retain(|_, entry| entry.touched_at >= cutoff);
        before - carts.len()
    }

    /// Number of live carts
    pub fn len(&self) -> usize {
        self.carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if no carts are live
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
