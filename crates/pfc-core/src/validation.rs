//! # Validation Module
//!
//! Checks applied to catalog records before they are written to storage.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Writers (seed binary, repository insert)                     │
//! │  └── THIS MODULE: id/title present, prices finite and >= 0             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── PRIMARY KEY on id                                                 │
//! │                                                                         │
//! │  Readers (CatalogStore::load) trust the snapshot as delivered.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pfc_core::validation::validate_product;
//! use pfc_core::Product;
//!
//! assert!(validate_product(&Product::new("p1", "Wings", 50.0, 90.0)).is_ok());
//! assert!(validate_product(&Product::new("p1", "", 50.0, 90.0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 64;
const MAX_TITLE_LEN: usize = 120;
const MAX_SPECIAL_ITEM_LEN: usize = 60;

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty
/// - At most 120 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a variant price: finite and non-negative.
///
/// ## Example
/// ```rust
/// use pfc_core::validation::validate_price;
///
/// assert!(validate_price("halfPrice", 0.0).is_ok());
/// assert!(validate_price("halfPrice", -5.0).is_err());
/// assert!(validate_price("fullPrice", f64::NAN).is_err());
/// ```
pub fn validate_price(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidPrice {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate_bps".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates the add-on names shown in the details popup.
pub fn validate_special_items(items: &[String]) -> ValidationResult<()> {
    for item in items {
        let item = item.trim();

        if item.is_empty() {
            return Err(ValidationError::Required {
                field: "specialItems[]".to_string(),
            });
        }

        if item.chars().count() > MAX_SPECIAL_ITEM_LEN {
            return Err(ValidationError::TooLong {
                field: "specialItems[]".to_string(),
                max: MAX_SPECIAL_ITEM_LEN,
            });
        }
    }

    Ok(())
}

/// Validates a whole catalog record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_title(&product.title)?;
    validate_price("halfPrice", product.half_price)?;
    validate_price("fullPrice", product.full_price)?;
    validate_special_items(&product.special_items)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("66f1c0ffee").is_ok());
        assert!(matches!(
            validate_product_id("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_id(&"x".repeat(65)),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Chicken Lollipop").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title(&"a".repeat(121)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("halfPrice", 49.5).is_ok());
        assert!(validate_price("halfPrice", -0.01).is_err());
        assert!(validate_price("fullPrice", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(500).is_ok());
        assert!(validate_tax_rate_bps(10_000).is_ok());
        assert!(validate_tax_rate_bps(10_001).is_err());
    }

    #[test]
    fn test_validate_special_items() {
        assert!(validate_special_items(&[]).is_ok());
        assert!(validate_special_items(&["Extra Dip".to_string()]).is_ok());
        assert!(validate_special_items(&["Extra Dip".to_string(), " ".to_string()]).is_err());
    }

    #[test]
    fn test_validate_product_reports_first_failure() {
        let product = Product::new("p1", "Wings", -1.0, -2.0);
        match validate_product(&product) {
            Err(ValidationError::InvalidPrice { field, .. }) => assert_eq!(field, "halfPrice"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
