//! # Cart Commands
//!
//! Quantity buttons and the order summary popup.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  change_quantity(+1)  ┌──────────┐                        │
//! │  │  Empty   │──────────────────────►│ Has items│◄──┐ change_quantity(±n)│
//! │  │  cart    │◄──────────────────────│          │───┘                    │
//! │  └──────────┘  last line hits zero  └──────────┘                        │
//! │                                          │                              │
//! │                                     get_cart → lines + summary          │
//! │                                     (footer shown while hasItems)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pfc_core::{CartLine, OrderSummary, Price, PricingCalculator, SummaryDisplay, Variant};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{Session, SessionState};

/// A cart line as the order summary renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    /// `<productId>-<Variant>`
    pub key: String,
    /// `<title> (<Variant>)`
    pub label: String,
    pub product_id: String,
    pub variant: Variant,
    pub image: String,
    pub unit_price: Price,
    pub quantity: u32,
    /// unit price × quantity, unrounded
    pub line_price: Price,
    pub line_price_display: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let line_price = line.line_total();
        CartLineView {
            key: line.key().to_string(),
            label: line.label(),
            product_id: line.product_id.clone(),
            variant: line.variant,
            image: line.image.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_price,
            line_price_display: line_price.to_string(),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    pub summary: OrderSummary,
    pub display: SummaryDisplay,
    /// Drives whether the order-summary footer is shown.
    pub has_items: bool,
    pub total_quantity: u64,
}

impl CartResponse {
    fn build(session: &Session, pricing: PricingCalculator) -> Self {
        let lines = session.cart.lines();
        let summary = pricing.summarize(lines);

        CartResponse {
            lines: lines.iter().map(CartLineView::from).collect(),
            display: summary.display(),
            summary,
            has_items: !session.cart.is_empty(),
            total_quantity: session.cart.total_quantity(),
        }
    }
}

/// Gets the current cart contents and totals.
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    let pricing = session.pricing();
    session.with_session(|s| CartResponse::build(s, pricing))
}

/// Applies a +/- button press (or any delta) to one portion.
///
/// ## Behavior
/// - Counter is clamped at zero; reaching zero drops the line
/// - A new line takes the portion's current catalog price
///
/// ## Returns
/// Updated cart, or `UNKNOWN_PRODUCT` when a new line is needed for an id
/// the catalog doesn't have (cart unchanged)
pub fn change_quantity(
    session: &SessionState,
    product_id: &str,
    variant: Variant,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, %variant, delta, "change_quantity command");

    let pricing = session.pricing();
    session.with_session_mut(|s| {
        match s.change_quantity(product_id, variant, delta) {
            Ok(quantity) => debug!(product_id = %product_id, %variant, quantity, "Quantity updated"),
            Err(e) => {
                warn!(error = %e, "Quantity change rejected");
                return Err(e.into());
            }
        }
        Ok(CartResponse::build(s, pricing))
    })
}

/// Counter shown between a portion's +/- buttons.
pub fn current_quantity(session: &SessionState, product_id: &str, variant: Variant) -> u32 {
    session.with_session(|s| s.cart.current_quantity(product_id, variant))
}
