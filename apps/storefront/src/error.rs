//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  CatalogClient ── ClientError ──┐                                      │
//! │                                  ├──► ApiError { code, message } ──► UI │
//! │  CartEngine ──── CoreError ─────┘                                      │
//! │                                                                         │
//! │  UNKNOWN_PRODUCT      quantity change for an id the catalog lacks      │
//! │  VALIDATION_ERROR     bad user input (variant, id)                     │
//! │  CATALOG_UNAVAILABLE  catalog fetch failed; previous menu kept         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pfc_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_PRODUCT",
///   "message": "Unknown product: 66f1c0ffee (Half)"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id did not resolve when a new cart line was needed
    UnknownProduct,

    /// Input validation failed
    ValidationError,

    /// Catalog could not be fetched or decoded
    CatalogUnavailable,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownProduct { .. } => {
                ApiError::new(ErrorCode::UnknownProduct, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts catalog fetch failures to API errors.
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        ApiError::new(ErrorCode::CatalogUnavailable, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Client Error
// =============================================================================

/// Catalog fetch failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, timeout, TLS, etc.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response; `body` is the server's text (e.g. "Server error: ...").
    #[error("Catalog returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a product array.
    #[error("Invalid catalog payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfc_core::{ValidationError, Variant};

    #[test]
    fn test_unknown_product_maps_to_code() {
        let err: ApiError = CoreError::unknown_product("p9", Variant::Full).into();
        assert_eq!(err.code, ErrorCode::UnknownProduct);
        assert_eq!(err.message, "Unknown product: p9 (Full)");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::validation("variant must be one of: [\"Half\", \"Full\"]");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().starts_with("variant"));

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "id".to_string(),
        })
        .into();
        assert_eq!(serde_json::to_value(&err).unwrap()["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_status_error_keeps_server_text() {
        let err: ApiError = ClientError::Status {
            status: 500,
            body: "Server error: disk I/O error".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert_eq!(err.message, "Catalog returned 500: Server error: disk I/O error");
    }
}
