//! # Product Repository
//!
//! Reads and writes menu products.
//!
//! ## Row Mapping
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────────┐
//! │ products column          │ pfc_core::Product field                      │
//! ├──────────────────────────┼──────────────────────────────────────────────┤
//! │ id                       │ id                                           │
//! │ title / description      │ title / description                          │
//! │ detailed_description     │ detailed_description                         │
//! │ image                    │ image                                        │
//! │ is_veg (INTEGER 0/1)     │ is_veg                                       │
//! │ half_price / full_price  │ half_price / full_price                      │
//! │ special_items (JSON)     │ special_items: Vec<String>                   │
//! │ created_at / updated_at  │ (storage only; created_at orders the menu)   │
//! └──────────────────────────┴──────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use pfc_core::validation::validate_product;
use pfc_core::Product;

const SELECT_PRODUCT: &str = r#"
    SELECT
        id,
        title,
        description,
        detailed_description,
        image,
        is_veg,
        half_price,
        full_price,
        special_items
    FROM products
"#;

#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    title: String,
    description: String,
    detailed_description: String,
    image: String,
    is_veg: bool,
    half_price: f64,
    full_price: f64,
    special_items: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = DbError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let special_items: Vec<String> =
            serde_json::from_str(&row.special_items).map_err(|e| DbError::CorruptRow {
                id: row.id.clone(),
                message: format!("special_items: {}", e),
            })?;

        Ok(Product {
            id: row.id,
            title: row.title,
            description: row.description,
            detailed_description: row.detailed_description,
            image: row.image,
            is_veg: row.is_veg,
            half_price: row.half_price,
            full_price: row.full_price,
            special_items,
        })
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let menu = repo.list_all().await?;
/// let wings = repo.get_by_id("66f1c0ffee").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Every product, oldest first (insertion order breaks ties).
    ///
    /// This is the catalog snapshot `GET /products` returns.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("{} ORDER BY created_at, rowid", SELECT_PRODUCT);

        let rows: Vec<ProductRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        let products = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<DbResult<Vec<_>>>()?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let sql = format!("{} WHERE id = ?1", SELECT_PRODUCT);

        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored product
    /// * `Err(DbError::Invalid)` - Record failed validation, nothing written
    /// * `Err(DbError::UniqueViolation)` - ID already exists
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        validate_product(product)?;

        debug!(id = %product.id, title = %product.title, "Inserting product");

        let special_items = serde_json::to_string(&product.special_items)
            .map_err(|e| DbError::Internal(e.to_string()))?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO products (
                id, title, description, detailed_description, image,
                is_veg, half_price, full_price, special_items,
                created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5,
                ?6, ?7, ?8, ?9,
                ?10, ?11
            )
            "#,
        )
        .bind(&product.id)
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.detailed_description)
        .bind(&product.image)
        .bind(product.is_veg)
        .bind(product.half_price)
        .bind(product.full_price)
        .bind(special_items)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::UniqueViolation { .. } => DbError::duplicate("id", &product.id),
            other => other,
        })?;

        Ok(product.clone())
    }

    /// Counts stored products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
