//! # Storefront Commands
//!
//! Everything the front end can ask of a session. Commands take the shared
//! state explicitly and return plain serializable values or `ApiError`.
//!
//! ## Command Categories
//! - **Catalog**: `list_products`, `product_details`, `reload_catalog`
//! - **Cart**: `change_quantity`, `current_quantity`, `get_cart`

pub mod cart;
pub mod catalog;

pub use cart::{change_quantity, current_quantity, get_cart, CartLineView, CartResponse};
pub use catalog::{
    list_products, load_products, product_details, reload_catalog, MenuItem, ProductDetails,
};
