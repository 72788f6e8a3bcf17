//! # Cart Engine
//!
//! Owns the per-variant quantity counters and the cart lines, and keeps the
//! two consistent.
//!
//! ## Quantity Change Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 change_quantity(product_id, variant, delta)             │
//! │                                                                         │
//! │  key = (product_id, variant)                                            │
//! │  new = max(counter(key) + delta, 0)                                     │
//! │       │                                                                 │
//! │       ├── new == 0 ──► drop line for key, drop counter                  │
//! │       │                                                                 │
//! │       ├── line exists ──► line.quantity = new (price untouched)         │
//! │       │                                                                 │
//! │       └── no line ──► lookup product ──► append line at the end         │
//! │                            │             unit_price = half/full price   │
//! │                            └── missing ──► UnknownProduct, no change    │
//! │                                                                         │
//! │  counter(key) = new                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Counters are never negative; a zero counter is never stored.
//! - At most one line per key.
//! - `counter(key) > 0` iff a line exists for `key`, and then
//!   `line.quantity == counter(key)`.
//! - Lines keep first-increment order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::ProductLookup;
use crate::error::{CoreError, CoreResult};
use crate::price::Price;
use crate::types::{Product, QuantityKey, Variant};

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// Title, image and unit price are copied from the product when the line is
/// created and never re-read from the catalog, so a catalog reload does not
/// reprice lines that are already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,
    pub variant: Variant,
    pub title: String,
    pub image: String,
    /// Price at time of adding (frozen).
    pub unit_price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// Snapshots a product in the given portion.
    pub fn from_product(product: &Product, variant: Variant, quantity: u32) -> Self {
        CartLine {
            product_id: product.id.clone(),
            variant,
            title: product.title.clone(),
            image: product.image.clone(),
            unit_price: product.price(variant),
            quantity,
        }
    }

    /// The counter key this line mirrors.
    pub fn key(&self) -> QuantityKey {
        QuantityKey::new(self.product_id.clone(), self.variant)
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Price {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// "Peri Peri Wings (Half)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.variant)
    }

    fn matches(&self, product_id: &str, variant: Variant) -> bool {
        self.product_id == product_id && self.variant == variant
    }
}

// =============================================================================
// Cart Engine
// =============================================================================

/// Quantity counters plus the ordered cart.
///
/// Every mutation goes through [`change_quantity`](CartEngine::change_quantity),
/// which restores the invariants before returning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartEngine {
    quantities: HashMap<QuantityKey, u32>,
    lines: Vec<CartLine>,
}

impl CartEngine {
    /// Creates an engine with no counters and an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `delta` to the counter for `(product_id, variant)`.
    ///
    /// ## Behavior
    /// - The result is clamped at zero; going below zero is not an error.
    /// - Reaching zero removes the line (a no-op when there is none).
    /// - An existing line only gets its quantity replaced.
    /// - A new line is priced from `catalog` and appended.
    ///
    /// ## Returns
    /// - `Ok(new_quantity)` on success
    /// - `Err(CoreError::UnknownProduct)` when a new line is needed and the
    ///   product does not resolve; nothing is modified in that case
    pub fn change_quantity<L>(
        &mut self,
        catalog: &L,
        product_id: &str,
        variant: Variant,
        delta: i64,
    ) -> CoreResult<u32>
    where
        L: ProductLookup + ?Sized,
    {
        let new_quantity = clamp_quantity(self.current_quantity(product_id, variant), delta);
        let key = QuantityKey::new(product_id, variant);

        if new_quantity == 0 {
            self.lines.retain(|line| !line.matches(product_id, variant));
            self.quantities.remove(&key);
            return Ok(0);
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.matches(product_id, variant))
        {
            Some(line) => line.quantity = new_quantity,
            None => {
                let product = catalog
                    .lookup(product_id)
                    .ok_or_else(|| CoreError::unknown_product(product_id, variant))?;
                self.lines
                    .push(CartLine::from_product(product, variant, new_quantity));
            }
        }

        self.quantities.insert(key, new_quantity);
        Ok(new_quantity)
    }

    /// Counter for the key, 0 when absent.
    pub fn current_quantity(&self, product_id: &str, variant: Variant) -> u32 {
        self.quantities
            .get(&QuantityKey::new(product_id, variant))
            .copied()
            .unwrap_or(0)
    }

    /// Current cart lines in first-increment order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for a key.
    pub fn line(&self, product_id: &str, variant: Variant) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.matches(product_id, variant))
    }

    /// Non-zero counters (iteration order is unspecified).
    pub fn quantities(&self) -> impl Iterator<Item = (&QuantityKey, u32)> + '_ {
        self.quantities.iter().map(|(key, &quantity)| (key, quantity))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// `max(current + delta, 0)`, saturating at `u32::MAX`.
fn clamp_quantity(current: u32, delta: i64) -> u32 {
    let next = i64::from(current).saturating_add(delta);
    next.clamp(0, i64::from(u32::MAX)) as u32
}

// =============================================================================
// Unit Tests
// =============================================================================
