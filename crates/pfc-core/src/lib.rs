//! # pfc-core: Pure Business Logic for the PFC Wings storefront
//!
//! This crate is the heart of the storefront. It holds the cart/quantity
//! state machine and the pricing engine as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PFC Wings Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront (presentation adapter)               │   │
//! │  │        Menu ──► +/- Half/Full ──► Order Summary                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ change_quantity / get_cart             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ pfc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  catalog  │  │   cart    │  │  pricing  │  │ validation│   │   │
//! │  │   │ Catalog-  │◄─│ CartEngine│─►│ Pricing-  │  │   rules   │   │   │
//! │  │   │  Store    │  │ CartLine  │  │ Calculator│  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │                                │ Vec<Product> (catalog snapshot)        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │             catalog-api  (GET /products, SQLite)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Variant, QuantityKey, TaxRate)
//! - [`price`] - Price amounts and their display formatting
//! - [`catalog`] - The catalog snapshot and product lookup
//! - [`cart`] - Quantity counters and cart lines
//! - [`pricing`] - Subtotal, tax and grand total
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use pfc_core::{CartEngine, CatalogStore, PricingCalculator, Product, Variant};
//!
//! let mut catalog = CatalogStore::new();
//! catalog.load(vec![Product::new("p1", "Peri Peri Wings", 50.0, 90.0)]);
//!
//! let mut cart = CartEngine::new();
//! cart.change_quantity(&catalog, "p1", Variant::Half, 1).unwrap();
//! cart.change_quantity(&catalog, "p1", Variant::Half, 1).unwrap();
//!
//! let summary = PricingCalculator::default().summarize(cart.lines());
//! assert_eq!(summary.subtotal.value(), 100.0);
//! assert_eq!(summary.display().grand_total, "105.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod price;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartEngine, CartLine};
pub use catalog::{CatalogStore, ProductLookup};
pub use error::{CoreError, CoreResult, ValidationError};
pub use price::Price;
pub use pricing::{OrderSummary, PricingCalculator, SummaryDisplay};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax rate applied to every order, in basis points (500 = 5%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 500;
