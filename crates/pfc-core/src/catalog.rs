//! # Catalog Snapshot
//!
//! Holds the list of products known at a point in time. The snapshot is
//! replaced wholesale whenever the catalog is fetched again.
//!
//! ```text
//! catalog-api ──GET /products──► Vec<Product> ──load()──► CatalogStore
//!                                                            │
//!                                         lookup(id) ◄───────┘
//!                                         (CartEngine, details popup)
//! ```

use std::collections::HashMap;

use crate::types::Product;

/// Resolves a product by id.
///
/// `CartEngine` only needs this much of the catalog, which keeps it testable
/// against any product source.
pub trait ProductLookup {
    fn lookup(&self, product_id: &str) -> Option<&Product>;
}

/// Immutable-per-fetch product snapshot.
///
/// ## Duplicates
/// Ids are not validated for uniqueness. When the same id appears more than
/// once, the later record wins in [`lookup`](ProductLookup::lookup) while
/// [`products`](CatalogStore::products) still lists every record in order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire snapshot.
    pub fn load(&mut self, products: impl IntoIterator<Item = Product>) {
        self.products = products.into_iter().collect();
        self.index = self
            .products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();
    }

    /// All products in the order the catalog delivered them.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of records in the snapshot (duplicates included).
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True until the first successful load.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for CatalogStore {
    fn lookup(&self, product_id: &str) -> Option<&Product> {
        self.index
            .get(product_id)
            .and_then(|&position| self.products.get(position))
    }
}

impl FromIterator<Product> for CatalogStore {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut store = CatalogStore::new();
        store.load(iter);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_after_load() {
        let mut catalog = CatalogStore::new();
        assert!(catalog.is_empty());
        assert!(catalog.lookup("p1").is_none());

        catalog.load(vec![
            Product::new("p1", "Wings", 50.0, 90.0),
            Product::new("p2", "Fries", 30.0, 55.0),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("p2").map(|p| p.title.as_str()), Some("Fries"));
        assert!(catalog.lookup("p3").is_none());
    }

    #[test]
    fn test_load_replaces_snapshot() {
        let mut catalog: CatalogStore =
            vec![Product::new("p1", "Wings", 50.0, 90.0)].into_iter().collect();

        catalog.load(vec![Product::new("p2", "Fries", 30.0, 55.0)]);

        assert!(catalog.lookup("p1").is_none());
        assert!(catalog.lookup("p2").is_some());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let catalog: CatalogStore = vec![
            Product::new("p1", "Old Wings", 50.0, 90.0),
            Product::new("p1", "New Wings", 60.0, 100.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        let product = catalog.lookup("p1").unwrap();
        assert_eq!(product.title, "New Wings");
        assert_eq!(product.half_price, 60.0);
    }
}
