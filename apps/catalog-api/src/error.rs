//! HTTP error mapping.
//!
//! Storage failures reach the client as `500` with a plain-text body of the
//! form `Server error: <message>`; the storefront only logs it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pfc_db::DbError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Server error: {0}")]
    Storage(#[from] DbError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(error = %self, "Request failed");
        (status, self.to_string()).into_response()
    }
}
