//! # Catalog Commands
//!
//! Menu listing, the details popup, and catalog (re)loading.

use pfc_core::{Price, Product, ProductLookup, Variant};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::client::CatalogClient;
use crate::error::ApiError;
use crate::state::SessionState;

/// One menu card: the product plus the counters shown on its buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub is_veg: bool,
    pub half_price: Price,
    pub full_price: Price,
    pub half_quantity: u32,
    pub full_quantity: u32,
}

impl MenuItem {
    /// Counter for a portion.
    pub fn quantity(&self, variant: Variant) -> u32 {
        match variant {
            Variant::Half => self.half_quantity,
            Variant::Full => self.full_quantity,
        }
    }

    /// Price for a portion.
    pub fn price(&self, variant: Variant) -> Price {
        match variant {
            Variant::Half => self.half_price,
            Variant::Full => self.full_price,
        }
    }
}

/// Content of the "Know More" popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: String,
    pub title: String,
    pub image: String,
    pub detailed_description: String,
    pub special_items: Vec<String>,
}

impl From<&Product> for ProductDetails {
    fn from(product: &Product) -> Self {
        ProductDetails {
            id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            detailed_description: product.detailed_description.clone(),
            special_items: product.special_items.clone(),
        }
    }
}

/// The catalog in served order, with per-variant counters.
pub fn list_products(session: &SessionState) -> Vec<MenuItem> {
    debug!("list_products command");

    session.with_session(|s| {
        s.catalog
            .products()
            .iter()
            .map(|product| MenuItem {
                id: product.id.clone(),
                title: product.title.clone(),
                description: product.description.clone(),
                image: product.image.clone(),
                is_veg: product.is_veg,
                half_price: product.price(Variant::Half),
                full_price: product.price(Variant::Full),
                half_quantity: s.cart.current_quantity(&product.id, Variant::Half),
                full_quantity: s.cart.current_quantity(&product.id, Variant::Full),
            })
            .collect()
    })
}

/// Details for one product; `None` when the id is not in the catalog.
pub fn product_details(session: &SessionState, product_id: &str) -> Option<ProductDetails> {
    debug!(product_id = %product_id, "product_details command");

    session.with_session(|s| s.catalog.lookup(product_id).map(ProductDetails::from))
}

/// Replaces the catalog snapshot. Cart lines keep their frozen prices.
pub fn load_products(session: &SessionState, products: Vec<Product>) -> usize {
    session.with_session_mut(|s| {
        s.catalog.load(products);
        s.catalog.len()
    })
}

/// Fetches the catalog and installs it.
///
/// ## Returns
/// - `Ok(count)` - number of products now in the catalog
/// - `Err(ApiError)` with `CATALOG_UNAVAILABLE` - fetch failed; the
///   previous catalog (empty on first load) stays in place
pub async fn reload_catalog(
    session: &SessionState,
    client: &CatalogClient,
) -> Result<usize, ApiError> {
    debug!(url = %client.url(), "reload_catalog command");

    match client.fetch_products().await {
        Ok(products) => {
            let count = load_products(session, products);
            info!(count, "Catalog loaded");
            Ok(count)
        }
        Err(e) => {
            error!(error = %e, "Error fetching products");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn menu() -> Vec<Product> {
        let mut wings = Product::new("w1", "Peri Peri Wings", 149.0, 279.0);
        wings.detailed_description = "Crisp fried wings.".to_string();
        wings.special_items = vec!["Extra Dip".to_string(), "Cheese".to_string()];
        let mut fries = Product::new("f1", "Masala Fries", 59.5, 99.5);
        fries.is_veg = true;
        vec![wings, fries]
    }

    #[test]
    fn test_list_products_shows_counters() {
        let session = SessionState::default();
        load_products(&session, menu());
        session
            .with_session_mut(|s| s.change_quantity("f1", Variant::Full, 2))
            .unwrap();

        let items = list_products(&session);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "w1");
        assert_eq!(items[0].quantity(Variant::Half), 0);
        assert_eq!(items[1].quantity(Variant::Full), 2);
        assert_eq!(items[1].price(Variant::Half).value(), 59.5);
        assert!(items[1].is_veg);
    }

    #[test]
    fn test_product_details() {
        let session = SessionState::default();
        load_products(&session, menu());

        let details = product_details(&session, "w1").unwrap();
        assert_eq!(details.detailed_description, "Crisp fried wings.");
        assert_eq!(details.special_items, vec!["Extra Dip", "Cheese"]);

        assert_eq!(product_details(&session, "nope"), None);
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_previous_catalog() {
        let session = SessionState::default();
        load_products(&session, menu());

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(500).body("Server error: boom");
        });
        let client = CatalogClient::new(server.url("/products"), Duration::from_secs(5)).unwrap();

        let err = reload_catalog(&session, &client).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert_eq!(list_products(&session).len(), 2);
    }

    #[tokio::test]
    async fn test_reload_replaces_catalog() {
        let session = SessionState::default();

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(serde_json::json!([
                {"_id": "n1", "title": "Lollipop", "halfPrice": 129, "fullPrice": 239}
            ]));
        });
        let client = CatalogClient::new(server.url("/products"), Duration::from_secs(5)).unwrap();

        assert_eq!(reload_catalog(&session, &client).await, Ok(1));
        assert_eq!(list_products(&session)[0].title, "Lollipop");
    }
}
