//! Configuration management for the address book demo.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file loaded first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Environment variable holding the listing page size.
pub const PAGE_SIZE_VAR: &str = "ADDRESS_BOOK_PAGE_SIZE";

/// Environment variable holding the fallback log level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Configuration for the address book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of records per page in the paginated listing (default: 1)
    pub page_size: usize,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page, must be > 0 (default: 1)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let page_size = Self::parse_env_usize(PAGE_SIZE_VAR, defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: PAGE_SIZE_VAR.to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or(defaults.log_level);

        Ok(Config {
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: 1,
            log_level: "error".to_string(),
        }
    }
}
