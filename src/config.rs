//! Configuration management for the Contact Finder.
//!
//! Values come from environment variables; a `.env` file is loaded first if
//! present. Nothing is printed to stdout, which carries MCP frames.

use crate::error::{ConfigError, ConfigResult};
use crate::session::DEFAULT_PAGE_SIZE;
use std::env;
use std::str::FromStr;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "error";

/// Settings for the contact list source, the results table and logging.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the static JSON contact list
    pub contacts_url: String,

    /// HTTP request timeout in seconds
    pub request_timeout: u64,

    /// Number of contacts shown per results page
    pub page_size: usize,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Config {
    /// Read the configuration from the process environment (and `.env`).
    ///
    /// - `CONTACTS_URL` (required): http(s) URL of the JSON contact list
    /// - `REQUEST_TIMEOUT`: seconds, default 10
    /// - `PAGE_SIZE`: rows per results page, default 5, must be at least 1
    /// - `LOG_LEVEL`: default "error"
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let config = Config {
            contacts_url: env::var("CONTACTS_URL")
                .map_err(|_| ConfigError::MissingVar("CONTACTS_URL".to_string()))?,
            request_timeout: parse_env("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            page_size: parse_env("PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        let url = self.contacts_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(invalid("CONTACTS_URL", "Must start with http:// or https://"));
        }
        if self.page_size == 0 {
            return Err(invalid("PAGE_SIZE", "Must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(var: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        reason: reason.into(),
    }
}

/// Numeric variable with a fallback when unset.
fn parse_env<T: FromStr>(var_name: &str, default: T) -> ConfigResult<T> {
    match env::var(var_name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| invalid(var_name, format!("Expected a non-negative integer, got: {}", raw))),
        Err(_) => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_url: String::new(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
