//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PIZZA_API_BASE_URL` - REST backend root (e.g. `http://localhost:8080`).
//!   Unset means the in-process backend is used.
//! - `PIZZA_CUSTOMER_FILE` - where last-used customer details are kept
//!   (default: `.pizza-customer.json`)
//! - `PIZZA_CATALOG_ATTEMPTS` - catalog fetch attempts, at least 1 (default: 3)
//! - `PIZZA_CATALOG_RETRY_MS` - delay between catalog attempts (default: 250)
//! - `PIZZA_HTTP_TIMEOUT_SECS` - per-request timeout for the REST backend (default: 10)
//!
//! Blank values count as unset.

use crate::catalog::RetryPolicy;
use reqwest::Url;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CUSTOMER_FILE: &str = ".pizza-customer.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// REST backend root; `None` selects the in-process backend.
    pub api_base_url: Option<Url>,
    pub customer_file: PathBuf,
    pub catalog_retry: RetryPolicy,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            customer_file: PathBuf::from(DEFAULT_CUSTOMER_FILE),
            catalog_retry: RetryPolicy::default(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which maps a variable name to
    /// its value.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_base_url = get("PIZZA_API_BASE_URL")
            .map(|raw| parse::<Url>("PIZZA_API_BASE_URL", &raw))
            .transpose()?;

        let customer_file = get("PIZZA_CUSTOMER_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.customer_file);

        let attempts = match get("PIZZA_CATALOG_ATTEMPTS") {
            Some(raw) => parse::<u32>("PIZZA_CATALOG_ATTEMPTS", &raw)?,
            None => defaults.catalog_retry.attempts,
        };
        if attempts == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "PIZZA_CATALOG_ATTEMPTS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let delay = match get("PIZZA_CATALOG_RETRY_MS") {
            Some(raw) => Duration::from_millis(parse("PIZZA_CATALOG_RETRY_MS", &raw)?),
            None => defaults.catalog_retry.delay,
        };

        let http_timeout = match get("PIZZA_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse("PIZZA_HTTP_TIMEOUT_SECS", &raw)?),
            None => defaults.http_timeout,
        };

        Ok(Self {
            api_base_url,
            customer_file,
            catalog_retry: RetryPolicy { attempts, delay },
            http_timeout,
        })
    }
}

fn parse<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(from_pairs(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            ("PIZZA_API_BASE_URL", "http://localhost:8080"),
            ("PIZZA_CUSTOMER_FILE", "/tmp/me.json"),
            ("PIZZA_CATALOG_ATTEMPTS", "5"),
            ("PIZZA_CATALOG_RETRY_MS", "40"),
            ("PIZZA_HTTP_TIMEOUT_SECS", "2"),
        ])
        .unwrap();
        assert_eq!(
            config.api_base_url.as_ref().map(Url::as_str),
            Some("http://localhost:8080/")
        );
        assert_eq!(config.customer_file, PathBuf::from("/tmp/me.json"));
        assert_eq!(config.catalog_retry.attempts, 5);
        assert_eq!(config.catalog_retry.delay, Duration::from_millis(40));
        assert_eq!(config.http_timeout, Duration::from_secs(2));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = from_pairs(&[("PIZZA_API_BASE_URL", "  ")]).unwrap();
        assert_eq!(config.api_base_url, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            from_pairs(&[("PIZZA_CATALOG_ATTEMPTS", "0")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "PIZZA_CATALOG_ATTEMPTS"
        ));
        assert!(matches!(
            from_pairs(&[("PIZZA_HTTP_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "PIZZA_HTTP_TIMEOUT_SECS"
        ));
        assert!(matches!(
            from_pairs(&[("PIZZA_API_BASE_URL", "not a url")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "PIZZA_API_BASE_URL"
        ));
    }
}
