//! Catalog API configuration.
//!
//! Loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

use pfc_db::DbConfig;

/// Catalog API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// HTTP port (`PORT`, default 5000)
    pub port: u16,

    /// SQLite file (`PFC_DB_PATH`, default `pfc.db`)
    pub db_path: PathBuf,

    /// Pool size (`PFC_DB_MAX_CONNECTIONS`, default 5)
    pub db_max_connections: u32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            db_path: PathBuf::from(lookup("PFC_DB_PATH").unwrap_or_else(|| "pfc.db".to_string())),

            db_max_connections: lookup("PFC_DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PFC_DB_MAX_CONNECTIONS".to_string()))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "PFC_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path).max_connections(self.db_max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
