//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Variant      │   │  QuantityKey    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Half           │   │  product_id     │       │
//! │  │  title, image   │   │  Full           │   │  variant        │       │
//! │  │  half_price     │   └─────────────────┘   └─────────────────┘       │
//! │  │  full_price     │                                                   │
//! │  │  special_items  │   ┌─────────────────┐                             │
//! │  └─────────────────┘   │    TaxRate      │                             │
//! │                        │  bps (u32)      │                             │
//! │                        │  500 = 5%       │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::price::Price;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 500 bps = 5%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// The storefront's fixed order tax (5%).
    pub const STANDARD: TaxRate = TaxRate(crate::DEFAULT_TAX_RATE_BPS);

    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a multiplier (500 bps → 0.05).
    ///
    /// `500.0 / 10_000.0` rounds to the same `f64` as the literal `0.05`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 10_000.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::STANDARD
    }
}

// =============================================================================
// Variant
// =============================================================================

/// Portion size selector. Each variant has its own price and its own
/// quantity counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Variant {
    Half,
    Full,
}

impl Variant {
    /// Both variants in menu order.
    pub const ALL: [Variant; 2] = [Variant::Half, Variant::Full];

    /// Wire/display name ("Half" / "Full").
    pub const fn as_str(&self) -> &'static str {
        match self {
            Variant::Half => "Half",
            Variant::Full => "Full",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ValidationError;

    /// Parses "half"/"full" in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half" => Ok(Variant::Half),
            "full" => Ok(Variant::Full),
            _ => Err(ValidationError::NotAllowed {
                field: "variant".to_string(),
                allowed: Variant::ALL.iter().map(|v| v.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A menu item as served by the catalog endpoint.
///
/// ## Wire Format
/// ```json
/// {
///   "id": "66f1...",
///   "title": "Peri Peri Wings",
///   "description": "Six wings tossed in peri peri",
///   "detailedDescription": "...",
///   "image": "https://...",
///   "isVeg": false,
///   "halfPrice": 50,
///   "fullPrice": 90,
///   "specialItems": ["Extra Dip", "Cheese"]
/// }
/// ```
/// Records coming from a document store that names the key `_id` are
/// accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    #[serde(alias = "_id")]
    pub id: String,

    /// Display name on the menu card and cart line.
    pub title: String,

    /// One-line blurb under the title.
    #[serde(default)]
    pub description: String,

    /// Long text for the details popup.
    #[serde(default)]
    pub detailed_description: String,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    /// Vegetarian marker.
    #[serde(default)]
    pub is_veg: bool,

    /// Price of the Half portion.
    pub half_price: f64,

    /// Price of the Full portion.
    pub full_price: f64,

    /// Add-on names offered in the details popup, in menu order.
    #[serde(default)]
    pub special_items: Vec<String>,
}

impl Product {
    /// Creates a product with just the fields the cart needs.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        half_price: f64,
        full_price: f64,
    ) -> Self {
        Product {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            detailed_description: String::new(),
            image: String::new(),
            is_veg: false,
            half_price,
            full_price,
            special_items: Vec::new(),
        }
    }

    /// Returns the price for the given portion.
    #[inline]
    pub fn price(&self, variant: Variant) -> Price {
        match variant {
            Variant::Half => Price::new(self.half_price),
            Variant::Full => Price::new(self.full_price),
        }
    }
}

// =============================================================================
// Quantity Key
// =============================================================================

/// Identifies one independent counter / cart line: a product in one portion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuantityKey {
    pub product_id: String,
    pub variant: Variant,
}

impl QuantityKey {
    pub fn new(product_id: impl Into<String>, variant: Variant) -> Self {
        QuantityKey {
            product_id: product_id.into(),
            variant,
        }
    }
}

/// Renders as `<productId>-<Variant>`, the key the menu uses for its counters.
impl fmt::Display for QuantityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.product_id, self.variant)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tax_rate_is_five_percent() {
        let rate = TaxRate::default();
        assert_eq!(rate.bps(), 500);
        assert_eq!(rate.fraction(), 0.05);
        assert!((rate.percentage() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("half".parse::<Variant>().unwrap(), Variant::Half);
        assert_eq!(" FULL ".parse::<Variant>().unwrap(), Variant::Full);
        assert!(matches!(
            "large".parse::<Variant>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_product_price_per_variant() {
        let product = Product::new("p1", "Wings", 50.0, 90.0);
        assert_eq!(product.price(Variant::Half).value(), 50.0);
        assert_eq!(product.price(Variant::Full).value(), 90.0);
    }

    #[test]
    fn test_product_accepts_underscore_id() {
        let json = r#"{
            "_id": "66f1",
            "title": "Paneer Tikka",
            "description": "Smoky cottage cheese",
            "detailedDescription": "Marinated overnight",
            "image": "https://img/paneer.jpg",
            "isVeg": true,
            "halfPrice": 120,
            "fullPrice": 220.5,
            "specialItems": ["Mint Chutney", "Onion Rings"],
            "__v": 0
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "66f1");
        assert!(product.is_veg);
        assert_eq!(product.full_price, 220.5);
        assert_eq!(product.special_items, vec!["Mint Chutney", "Onion Rings"]);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new("p1", "Wings", 50.0, 90.0);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], "p1");
        assert_eq!(value["halfPrice"], 50.0);
        assert_eq!(value["isVeg"], false);
        assert!(value["specialItems"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_quantity_key_display() {
        let key = QuantityKey::new("p1", Variant::Full);
        assert_eq!(key.to_string(), "p1-Full");
    }
}
