//! # Error Types
//!
//! Domain-specific error types for pfc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pfc-core errors (this file)                                           │
//! │  ├── CoreError        - Cart/catalog domain errors                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pfc-db errors (separate crate)                                        │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::Variant;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A new cart line was needed but the product is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Quantity change requested before the catalog fetch completed
    /// - Product dropped out of the catalog after a reload
    ///
    /// The cart and the quantity counters are left untouched.
    #[error("Unknown product: {product_id} ({variant})")]
    UnknownProduct { product_id: String, variant: Variant },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an UnknownProduct error.
    pub fn unknown_product(product_id: impl Into<String>, variant: Variant) -> Self {
        CoreError::UnknownProduct {
            product_id: product_id.into(),
            variant,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a catalog record or a user-typed value does not meet the
/// catalog contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Price is negative, NaN or infinite.
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidPrice { field: String, value: f64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_product_message() {
        let err = CoreError::unknown_product("66f1c0ffee", Variant::Half);
        assert_eq!(err.to_string(), "Unknown product: 66f1c0ffee (Half)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::InvalidPrice {
            field: "halfPrice".to_string(),
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "halfPrice must be a non-negative number, got -1"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
