//! # Price Module
//!
//! Provides the `Price` type for menu prices and order totals.
//!
//! ## Floating Point, Rounded Only For Display
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices arrive as JSON numbers (50, 89.5, ...).                │
//! │                                                                         │
//! │  Arithmetic stays in full-precision f64:                               │
//! │    subtotal = Σ unit_price × quantity                                  │
//! │    tax      = subtotal × 0.05                                          │
//! │    total    = subtotal + tax                                           │
//! │                                                                         │
//! │  Rounding happens only when a value is turned into text:               │
//! │    Display         → shortest round-trip form ("100", "52.5")          │
//! │    fixed(2)        → two decimals, ties away from zero ("5.25")        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pfc_core::price::Price;
//!
//! let unit = Price::new(52.5);
//! let line = unit.multiply_quantity(2);
//! assert_eq!(line.to_string(), "105");
//! assert_eq!(line.fixed(2), "105.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Price Type
// =============================================================================

/// A monetary amount in the catalog's currency unit.
///
/// ## User Workflow Context
/// ```text
/// Product.half_price ──┬──► CartLine.unit_price ──► CartLine.line_total
///                      │
///                      └──► "@50 Half" on the menu card
///
/// Σ line totals ──► subtotal ──► tax ──► grand total ──► Order Summary
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Price(f64);

impl Price {
    /// Creates a price from a raw amount.
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Price(amount)
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use pfc_core::price::Price;
    ///
    /// let unit_price = Price::new(90.0);
    /// assert_eq!(unit_price.multiply_quantity(3).value(), 270.0);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, quantity: u32) -> Self {
        Price(self.0 * f64::from(quantity))
    }

    /// Applies a tax rate to this amount, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use pfc_core::price::Price;
    /// use pfc_core::types::TaxRate;
    ///
    /// let subtotal = Price::new(100.0);
    /// assert_eq!(subtotal.apply_rate(TaxRate::STANDARD).value(), 5.0);
    /// ```
    #[inline]
    pub fn apply_rate(&self, rate: TaxRate) -> Self {
        Price(self.0 * rate.fraction())
    }

    /// Formats with a fixed number of decimals.
    ///
    /// Rounds the stored binary value, so `0.015` (really
    /// `0.01499999999999999944...`) gives `"0.01"`. Exact ties round away
    /// from zero (`0.125` → `"0.13"`).
    pub fn fixed(&self, decimals: u32) -> String {
        let places = decimals as usize;
        let factor = 10f64.powi(decimals as i32);
        let scaled = self.0 * factor;

        // Zero residual means `scaled` is the exact product.
        let residual = self.0.mul_add(factor, -scaled);
        if residual == 0.0 && scaled.fract().abs() == 0.5 {
            return format!("{:.*}", places, scaled.round() / factor);
        }

        format!("{:.*}", places, self.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shortest representation that round-trips (`100`, `52.5`,
/// `0.30000000000000004`). Used where the summary shows a value unrounded.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, quantity: u32) -> Self {
        self.multiply_quantity(quantity)
    }
}

/// Left-to-right sum starting from zero.
impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
