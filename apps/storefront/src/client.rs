//! # Catalog Client
//!
//! Fetches the menu snapshot from catalog-api.
//!
//! ```text
//! GET <catalog_url>
//!   200 + JSON array ──► Vec<Product>     (`id` or `_id` accepted)
//!   non-2xx          ──► ClientError::Status { status, body }
//!   bad JSON         ──► ClientError::Decode
//!   no answer        ──► ClientError::Request (after fetch_timeout)
//! ```

use std::time::Duration;

use pfc_core::Product;
use tracing::debug;

use crate::error::ClientError;

/// HTTP client for the catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    url: String,
}

impl CatalogClient {
    /// Creates a client for `url` with a whole-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(CatalogClient {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET of the full catalog.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        debug!(url = %self.url, "Fetching products");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let products: Vec<Product> = serde_json::from_str(&body)?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }
}
