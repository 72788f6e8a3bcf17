//! # Configuration State
//!
//! Storefront settings, read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`PFC_*`)
//! 3. Defaults (this file)
//!
//! Read-only after initialization, so no mutex needed.

use std::time::Duration;

use clap::Parser;
use pfc_core::validation::validate_tax_rate_bps;
use pfc_core::{TaxRate, ValidationError, DEFAULT_TAX_RATE_BPS};

pub const DEFAULT_CATALOG_URL: &str = "http://localhost:5000/products";

/// Command-line arguments for the `storefront` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", about = "PFC Wings storefront")]
pub struct Args {
    /// Catalog endpoint
    #[arg(long, env = "PFC_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Order tax in basis points (500 = 5%)
    #[arg(long, env = "PFC_TAX_RATE_BPS", default_value_t = DEFAULT_TAX_RATE_BPS)]
    pub tax_rate_bps: u32,

    /// Symbol printed in front of prices
    #[arg(long, env = "PFC_CURRENCY_SYMBOL", default_value = "$")]
    pub currency_symbol: String,

    /// Catalog fetch timeout in seconds
    #[arg(long, env = "PFC_FETCH_TIMEOUT_SECS", default_value_t = 10)]
    pub fetch_timeout_secs: u64,
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    pub catalog_url: String,
    pub tax_rate: TaxRate,
    pub currency_symbol: String,
    pub fetch_timeout: Duration,
}

impl TryFrom<Args> for ConfigState {
    type Error = ValidationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        validate_tax_rate_bps(args.tax_rate_bps)?;

        if args.catalog_url.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "catalog_url".to_string(),
            });
        }

        if args.fetch_timeout_secs == 0 {
            return Err(ValidationError::OutOfRange {
                field: "fetch_timeout_secs".to_string(),
                min: 1,
                max: i64::from(u32::MAX),
            });
        }

        Ok(ConfigState {
            catalog_url: args.catalog_url.trim().to_string(),
            tax_rate: TaxRate::from_bps(args.tax_rate_bps),
            currency_symbol: args.currency_symbol,
            fetch_timeout: Duration::from_secs(args.fetch_timeout_secs),
        })
    }
}

impl Default for ConfigState {
    /// `http://localhost:5000/products`, 5% tax, `$`, 10 second timeout.
    fn default() -> Self {
        ConfigState {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            tax_rate: TaxRate::STANDARD,
            currency_symbol: "$".to_string(),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<ConfigState, ValidationError> {
        let mut full = vec!["storefront"];
        full.extend_from_slice(argv);
        ConfigState::try_from(Args::parse_from(full))
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--catalog-url",
            "http://menu.internal/products",
            "--tax-rate-bps",
            "1800",
            "--currency-symbol",
            "₹",
        ])
        .unwrap();

        assert_eq!(config.catalog_url, "http://menu.internal/products");
        assert_eq!(config.tax_rate.bps(), 1800);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(matches!(
            parse(&["--tax-rate-bps", "10001"]),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(parse(&["--fetch-timeout-secs", "0"]).is_err());
        assert!(parse(&["--catalog-url", "  "]).is_err());
    }

    #[test]
    fn test_default_matches_storefront_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.catalog_url, "http://localhost:5000/products");
        assert_eq!(config.tax_rate, TaxRate::STANDARD);
    }

    #[test]
    fn test_tax_rate_stays_five_percent_unless_overridden() {
        if std::env::var_os("PFC_TAX_RATE_BPS").is_some() {
            return;
        }
        assert_eq!(parse(&[]).unwrap().tax_rate.bps(), 500);
        assert_eq!(parse(&["--tax-rate-bps", "0"]).unwrap().tax_rate.bps(), 0);
    }
}
