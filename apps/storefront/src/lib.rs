//! # PFC Storefront
//!
//! Cart session over a catalog fetched from catalog-api.
//!
//! ## Module Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  repl.rs      line commands ──► commands/                               │
//! │  view.rs      menu, details and cart as text                            │
//! │  commands/    catalog.rs (menu, details, reload), cart.rs (+/-, totals) │
//! │  state/       SessionState (catalog + cart), ConfigState                │
//! │  client.rs    GET /products                                             │
//! │  error.rs     ApiError { code, message }, ClientError                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod commands;
pub mod error;
pub mod repl;
pub mod state;
pub mod view;

pub use client::CatalogClient;
pub use error::{ApiError, ClientError, ErrorCode};
pub use repl::{Command, Step, Storefront};
pub use state::{Args, ConfigState, SessionState};
