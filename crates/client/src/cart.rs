//! Cart store: the in-memory record of what the user intends to purchase.
//!
//! The cart is an aggregate of `(product, quantity)` lines owned by a single
//! [`CartStore`] for the lifetime of the app session. Mutation happens through
//! `&mut self` operations only, so the single-writer model of the UI event
//! loop needs no locking. The cart is not persisted across process restarts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use pocketshop_core::ProductId;

use crate::catalog::Catalog;

/// Errors that can occur during cart operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// Increment or decrement targeted a product with no line in the cart.
    #[error("no cart line for product {0}")]
    NotFound(ProductId),
}

/// A `(product, quantity)` line within the cart.
///
/// Invariant: `quantity >= 1`. A line whose quantity would reach zero is
/// removed from the cart instead of being kept at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product this line refers to.
    pub id: ProductId,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

/// Authoritative in-memory cart aggregate.
///
/// At most one [`CartItem`] exists per product id; insertion order is
/// preserved for display.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Current cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the line for a product, if present.
    #[must_use]
    pub fn item(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add a product to the cart with quantity 1.
    ///
    /// If a line for `id` already exists this is a no-op; quantity changes go
    /// through [`Self::increment_item`]. Never fails.
    pub fn add_item(&mut self, id: ProductId) {
        if self.item(id).is_none() {
            self.items.push(CartItem { id, quantity: 1 });
        }
    }

    /// Increase the quantity of an existing line by 1.
    ///
    /// Quantity is unbounded apart from the `u32` range; the addition
    /// saturates rather than wraps, so the quantity invariant holds even at
    /// the extreme.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no line exists for `id`.
    pub fn increment_item(&mut self, id: ProductId) -> Result<u32, CartError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CartError::NotFound(id))?;
        item.quantity = item.quantity.saturating_add(1);
        Ok(item.quantity)
    }

    /// Decrease the quantity of an existing line by 1.
    ///
    /// A line that reaches quantity 0 is removed from the cart. Returns the
    /// new quantity (0 means the line is gone).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no line exists for `id`.
    pub fn decrement_item(&mut self, id: ProductId) -> Result<u32, CartError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::NotFound(id))?;

        let item = &mut self.items[pos];
        item.quantity -= 1;
        let quantity = item.quantity;
        if quantity == 0 {
            self.items.remove(pos);
        }
        Ok(quantity)
    }

    /// Delete the line for a product, if present. No-op otherwise.
    pub fn remove_item(&mut self, id: ProductId) {
        self.items.retain(|item| item.id != id);
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Total price across all lines at full decimal precision.
    ///
    /// Unit prices come from the catalog. A line whose product is missing
    /// from the catalog contributes zero and is logged as a data-integrity
    /// warning; it is never fatal. Rounding to two decimal places happens at
    /// the presentation boundary, not here.
    #[must_use]
    pub fn total_price(&self, catalog: &Catalog) -> Decimal {
        self.items
            .iter()
            .map(|item| {
                catalog.by_id(item.id).map_or_else(
                    || {
                        warn!(product_id = %item.id, "cart references a product missing from the catalog");
                        Decimal::ZERO
                    },
                    |product| product.price.amount * Decimal::from(item.quantity),
                )
            })
            .sum()
    }

    /// Clear all lines. Always succeeds.
    pub fn reset(&mut self) {
        self.items.clear();
    }
}
