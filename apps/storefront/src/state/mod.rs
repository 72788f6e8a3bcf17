//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      SessionState        │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  Arc<Mutex<Session {     │        │  catalog_url             │      │
//! │  │    catalog, cart }>>     │        │  tax_rate                │      │
//! │  │  PricingCalculator       │        │  currency_symbol         │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: one Mutex for catalog and cart                        │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{Args, ConfigState, DEFAULT_CATALOG_URL};
pub use session::{Session, SessionState};
