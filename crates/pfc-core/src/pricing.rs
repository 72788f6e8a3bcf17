//! # Pricing
//!
//! Pure functions from a cart snapshot to order totals.
//!
//! ```text
//! lines() ──► subtotal = Σ unit_price × quantity
//!                 │
//!                 ├──► tax = subtotal × rate          (rate = 5%)
//!                 │
//!                 └──► grand_total = subtotal + tax
//! ```
//!
//! Values are never rounded here. [`OrderSummary::display`] produces the
//! strings the order summary shows: the subtotal as-is, tax and grand total
//! with two decimals.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::price::Price;
use crate::types::TaxRate;

/// Computes order totals at a given tax rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingCalculator {
    tax_rate: TaxRate,
}

impl PricingCalculator {
    pub const fn new(tax_rate: TaxRate) -> Self {
        PricingCalculator { tax_rate }
    }

    pub const fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Σ line totals, in cart order.
    pub fn subtotal(&self, lines: &[CartLine]) -> Price {
        lines.iter().map(CartLine::line_total).sum()
    }

    /// subtotal × rate.
    pub fn tax(&self, lines: &[CartLine]) -> Price {
        self.subtotal(lines).apply_rate(self.tax_rate)
    }

    /// subtotal + tax.
    pub fn grand_total(&self, lines: &[CartLine]) -> Price {
        self.summarize(lines).grand_total
    }

    /// All three totals from a single pass over the lines.
    pub fn summarize(&self, lines: &[CartLine]) -> OrderSummary {
        let subtotal = self.subtotal(lines);
        let tax = subtotal.apply_rate(self.tax_rate);
        OrderSummary {
            subtotal,
            tax,
            grand_total: subtotal + tax,
            tax_rate: self.tax_rate,
        }
    }
}

/// Subtotal at the standard 5% rate.
pub fn subtotal(lines: &[CartLine]) -> Price {
    PricingCalculator::default().subtotal(lines)
}

/// Tax at the standard 5% rate.
pub fn tax(lines: &[CartLine]) -> Price {
    PricingCalculator::default().tax(lines)
}

/// Grand total at the standard 5% rate.
pub fn grand_total(lines: &[CartLine]) -> Price {
    PricingCalculator::default().grand_total(lines)
}

/// Full-precision order totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub tax: Price,
    pub grand_total: Price,
    pub tax_rate: TaxRate,
}

impl OrderSummary {
    /// Text for the order summary footer.
    ///
    /// The subtotal is shown unrounded while tax and grand total get two
    /// decimals; the storefront has always rendered them that way.
    pub fn display(&self) -> SummaryDisplay {
        SummaryDisplay {
            subtotal: self.subtotal.to_string(),
            tax: self.tax.fixed(2),
            grand_total: self.grand_total.fixed(2),
        }
    }
}

/// Display strings for [`OrderSummary`], without currency symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SummaryDisplay {
    pub subtotal: String,
    pub tax: String,
    pub grand_total: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Product, Variant};

    fn line(unit_price: f64, quantity: u32) -> CartLine {
        let product = Product::new("p", "Item", unit_price, unit_price);
        CartLine::from_product(&product, Variant::Half, quantity)
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let summary = PricingCalculator::default().summarize(&[]);
        assert!(summary.subtotal.is_zero());
        assert!(summary.tax.is_zero());
        assert!(summary.grand_total.is_zero());
        assert_eq!(
            summary.display(),
            SummaryDisplay {
                subtotal: "0".to_string(),
                tax: "0.00".to_string(),
                grand_total: "0.00".to_string(),
            }
        );
    }

    #[test]
    fn test_tax_and_total_follow_subtotal() {
        let lines = vec![line(50.0, 2), line(89.5, 1), line(12.25, 3)];

        let sub = subtotal(&lines);
        assert_eq!(sub.value(), 50.0 * 2.0 + 89.5 + 12.25 * 3.0);
        assert_eq!(tax(&lines).value(), sub.value() * 0.05);
        assert_eq!(grand_total(&lines).value(), sub.value() + sub.value() * 0.05);
    }

    #[test]
    fn test_display_rounds_only_tax_and_total() {
        let lines = vec![line(52.5, 1), line(33.15, 1)];
        let display = PricingCalculator::default().summarize(&lines).display();

        // 52.5 + 33.15 in binary floating point
        assert_eq!(display.subtotal, (52.5f64 + 33.15).to_string());
        // raw tax is 4.28250000000000064, just above the tie
        assert_eq!(display.tax, "4.29");
        assert_eq!(display.grand_total, "89.93");
    }

    #[test]
    fn test_display_rounds_raw_values_below_boundary() {
        let summary = PricingCalculator::default().summarize(&[line(0.3, 1)]);
        assert_eq!(summary.tax.value(), 0.3 * 0.05);
        assert_eq!(summary.display().tax, "0.01");
        assert_eq!(summary.display().grand_total, "0.32");

        let display = PricingCalculator::default().summarize(&[line(1.9, 1)]).display();
        assert_eq!(display.subtotal, "1.9");
        assert_eq!(display.tax, "0.10");
        assert_eq!(display.grand_total, "1.99");
    }

    #[test]
    fn test_custom_rate() {
        let calculator = PricingCalculator::new(TaxRate::from_bps(1_800));
        let summary = calculator.summarize(&[line(100.0, 1)]);
        assert_eq!(summary.tax.value(), 18.0);
        assert_eq!(summary.grand_total.value(), 118.0);
        assert_eq!(summary.tax_rate.bps(), 1_800);
    }
}
