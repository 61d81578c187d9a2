//! Shop configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                  | Default         |
//! |---------------------------|-----------------|
//! | `SHOP_DB_PATH`            | `./shop_dev.db` |
//! | `SHOP_XML_PATH`           | `products.xml`  |
//! | `SHOP_TAX_RATE_BPS`       | `2000` (20%)    |
//! | `SHOP_DB_MAX_CONNECTIONS` | `5`             |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use shop_core::{TaxRate, DEFAULT_TAX_RATE_BPS};

use crate::pool::DbConfig;

/// Shop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite catalog database file
    pub database_path: PathBuf,

    /// Where the XML writer output is saved
    pub xml_path: PathBuf,

    /// Checkout tax rate in basis points (2000 = 20%)
    pub tax_rate_bps: u32,

    /// Pool size for the catalog database
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            database_path: PathBuf::from("./shop_dev.db"),
            xml_path: PathBuf::from("products.xml"),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            max_connections: 5,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `load()` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = StoreConfig::default();

        let config = StoreConfig {
            database_path: lookup("SHOP_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            xml_path: lookup("SHOP_XML_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.xml_path),

            tax_rate_bps: match lookup("SHOP_TAX_RATE_BPS") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("SHOP_TAX_RATE_BPS".to_string()))?,
                None => defaults.tax_rate_bps,
            },

            max_connections: match lookup("SHOP_DB_MAX_CONNECTIONS") {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue("SHOP_DB_MAX_CONNECTIONS".to_string())
                })?,
                None => defaults.max_connections,
            },
        };

        // 10_000 bps is 100%, anything above is not a rate
        if config.tax_rate_bps > 10_000 {
            return Err(ConfigError::InvalidValue("SHOP_TAX_RATE_BPS".to_string()));
        }

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "SHOP_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// The configured checkout tax rate.
    pub fn tax_rate(&self) -> Result<TaxRate, ConfigError> {
        TaxRate::from_bps(self.tax_rate_bps)
            .map_err(|_| ConfigError::InvalidValue("SHOP_TAX_RATE_BPS".to_string()))
    }

    /// Database pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_path, PathBuf::from("./shop_dev.db"));
        assert_eq!(config.xml_path, PathBuf::from("products.xml"));
        assert_eq!(config.tax_rate_bps, 2000);
        assert_eq!(config.max_connections, 5);
        assert!((config.tax_rate().unwrap().fraction() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("SHOP_DB_PATH", "/tmp/catalog.db"),
            ("SHOP_XML_PATH", "/tmp/out.xml"),
            ("SHOP_TAX_RATE_BPS", "850"),
            ("SHOP_DB_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/catalog.db"));
        assert_eq!(config.xml_path, PathBuf::from("/tmp/out.xml"));
        assert!((config.tax_rate().unwrap().percentage() - 8.5).abs() < 1e-9);

        let db = config.db_config();
        assert_eq!(db.max_connections, 2);
        assert_eq!(db.database_path, PathBuf::from("/tmp/catalog.db"));
    }

    #[test]
    fn test_invalid_values() {
        let err = StoreConfig::from_lookup(lookup_from(&[("SHOP_TAX_RATE_BPS", "twenty")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SHOP_TAX_RATE_BPS");

        assert!(StoreConfig::from_lookup(lookup_from(&[("SHOP_TAX_RATE_BPS", "10001")])).is_err());
        assert!(
            StoreConfig::from_lookup(lookup_from(&[("SHOP_DB_MAX_CONNECTIONS", "0")])).is_err()
        );
    }
}
