//! # PFC Storefront
//!
//! ```text
//! stdin ──► Command ──► Storefront ──► stdout
//!                           │
//!                           └── GET /products (startup and `reload`)
//! ```

use clap::Parser;
use pfc_storefront::repl::HELP;
use pfc_storefront::{Args, ConfigState, Step, Storefront};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigState::try_from(Args::parse())?;
    init_tracing();

    info!(
        catalog_url = %config.catalog_url,
        tax_bps = config.tax_rate.bps(),
        "Configuration loaded"
    );

    let app = Storefront::new(config)?;

    // Starts with an empty menu when the catalog is down; `reload` retries.
    match app.handle_line("reload").await {
        Step::Print(text) => println!("{}", text),
        Step::Quit => return Ok(()),
    }
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match app.handle_line(&line).await {
            Step::Print(text) => println!("{}", text),
            Step::Quit => break,
        }
    }

    if app.session.with_session(|s| !s.cart.is_empty()) {
        warn!("Exiting with items in the cart");
    }
    Ok(())
}

/// `RUST_LOG` overrides the default filter. Logs go to stderr so they stay
/// out of the menu output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pfc=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
