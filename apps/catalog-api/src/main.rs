//! # PFC Catalog API
//!
//! ```text
//! Storefront ───► HTTP (PORT, default 5000) ───► pfc-db ───► SQLite
//! ```

use pfc_catalog_api::config::ApiConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        db_path = %config.db_path.display(),
        "Configuration loaded"
    );

    pfc_catalog_api::run(config).await
}

/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pfc=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
