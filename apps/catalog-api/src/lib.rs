//! # PFC Catalog API
//!
//! Serves the menu to the storefront.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /products  ──► 200 JSON array of products, storage order           │
//! │                 └─► 500 text/plain "Server error: <message>"            │
//! │  GET /health    ──► 200 "OK"                                            │
//! │                                                                         │
//! │  Every route: permissive CORS (any origin, method and header)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;

use axum::{extract::State, routing::get, Json, Router};
use pfc_core::Product;
use pfc_db::Database;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::AppError;

/// Builds the HTTP router over a database handle.
pub fn router(db: Database) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(db)
}

async fn list_products(State(db): State<Database>) -> Result<Json<Vec<Product>>, AppError> {
    let products = db.products().list_all().await?;
    debug!(count = products.len(), "Serving catalog");
    Ok(Json(products))
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Opens the database, binds the port and serves until ctrl-c / SIGTERM.
pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let db = Database::new(config.db_config()).await?;
    info!(products = db.products().count().await?, "Catalog ready");

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Server running");

    axum::serve(listener, router(db.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use pfc_db::DbConfig;
    use tower::ServiceExt;

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut wings = Product::new("w1", "Peri Peri Wings", 149.0, 279.0);
        wings.special_items = vec!["Extra Dip".to_string()];
        let mut fries = Product::new("f1", "Masala Fries", 59.5, 99.5);
        fries.is_veg = true;

        db.products().insert(&wings).await.unwrap();
        db.products().insert(&fries).await.unwrap();
        db
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    #[tokio::test]
    async fn test_products_returns_catalog_in_storage_order() {
        let (status, _, body) = get(router(seeded_db().await), "/products").await;
        assert_eq!(status, StatusCode::OK);

        let products: Vec<Product> = serde_json::from_slice(&body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "w1");
        assert_eq!(products[0].special_items, vec!["Extra Dip".to_string()]);
        assert_eq!(products[1].id, "f1");
        assert!(products[1].is_veg);

        let raw: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(raw[1]["halfPrice"], serde_json::json!(59.5));
        assert_eq!(raw[1]["isVeg"], serde_json::json!(true));
    }

    #[tokio::test]
    async fn test_empty_catalog_is_empty_array() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (status, _, body) = get(router(db), "/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn test_storage_failure_is_500_server_error() {
        let db = seeded_db().await;
        db.close().await;

        let (status, _, body) = get(router(db), "/products").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("Server error: "), "body was {:?}", text);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let (_, headers, _) = get(router(seeded_db().await), "/products").await;

        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_health() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (status, _, body) = get(router(db), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }
}
