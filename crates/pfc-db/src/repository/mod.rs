//! # Repository Module
//!
//! SQL lives here and nowhere else. Callers get `pfc_core::Product` values
//! back, never rows.
//!
//! ```text
//! db.products().list_all()
//!       │
//!       ▼
//! ProductRepository ── SQL ──► SQLite
//!       │
//!       ▼
//! Vec<Product>
//! ```

pub mod product;
