//! # Console Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`WAREHOUSE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use warehouse_core::DEFAULT_CAPACITY;

/// Environment variable overriding the store capacity.
pub const ENV_CAPACITY: &str = "WAREHOUSE_CAPACITY";
/// Environment variable overriding the currency symbol.
pub const ENV_CURRENCY: &str = "WAREHOUSE_CURRENCY";
/// Environment variable holding the default log filter.
pub const ENV_LOG: &str = "WAREHOUSE_LOG";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Maximum number of items the store accepts.
    pub capacity: usize,

    /// Currency symbol printed in front of prices.
    pub currency_symbol: String,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ConsoleConfig {
    /// ## Default Values
    /// - Capacity: 2000 items
    /// - Currency: `$`
    /// - Logging: warnings and errors only
    fn default() -> Self {
        ConsoleConfig {
            capacity: DEFAULT_CAPACITY,
            currency_symbol: "$".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// every key it returns `None` for.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConsoleConfig::default();

        if let Some(raw) = lookup(ENV_CAPACITY) {
            config.capacity = match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_CAPACITY.to_string(),
                        value: raw,
                    })
                }
            };
        }

        if let Some(symbol) = lookup(ENV_CURRENCY) {
            config.currency_symbol = symbol;
        }

        if let Some(filter) = lookup(ENV_LOG) {
            if !filter.trim().is_empty() {
                config.log_filter = filter.trim().to_string();
            }
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
