//! # Session State
//!
//! One shopper's catalog snapshot and cart.
//!
//! ## Thread Safety
//! Catalog and cart share a single `Mutex` so a quantity change always sees
//! the catalog it resolves against, and two quantity changes never
//! interleave. Totals are computed from the snapshot held under the lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                 Lock    Session change                         │
//! │  ───────                 ────    ──────────────                         │
//! │  reload_catalog ───────► write ► catalog.load(products)                 │
//! │  change_quantity ──────► write ► cart.change_quantity(&catalog, ..)     │
//! │  list_products / get_cart / current_quantity ► read only                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use pfc_core::{CartEngine, CatalogStore, CoreResult, PricingCalculator, TaxRate, Variant};

/// Catalog plus cart, guarded together.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub catalog: CatalogStore,
    pub cart: CartEngine,
}

impl Session {
    /// Applies a quantity change against the current catalog.
    pub fn change_quantity(
        &mut self,
        product_id: &str,
        variant: Variant,
        delta: i64,
    ) -> CoreResult<u32> {
        self.cart
            .change_quantity(&self.catalog, product_id, variant, delta)
    }
}

/// Shared session handle.
///
/// Clones share the same session.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
    pricing: PricingCalculator,
}

impl SessionState {
    /// Empty catalog, empty cart.
    pub fn new(tax_rate: TaxRate) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::default())),
            pricing: PricingCalculator::new(tax_rate),
        }
    }

    pub fn pricing(&self) -> PricingCalculator {
        self.pricing
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let lines = session.with_session(|s| s.cart.lines().to_vec());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_session_mut(|s| s.change_quantity("p1", Variant::Half, 1))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(TaxRate::STANDARD)
    }
}
