// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the storefront, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Base URL of the REST catalog API, e.g. "http://localhost:5000/api".
    pub catalog_api_url: String,
    /// Prefix for vehicle image paths returned by the API.
    pub asset_base_url: String,
    /// Account / back-office app that owns login, settings and admin pages.
    pub account_app_url: String,
    pub catalog_timeout: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            catalog_api_url: "http://localhost:5000/api".to_string(),
            asset_base_url: "http://localhost:5000".to_string(),
            account_app_url: "http://localhost:5173".to_string(),
            catalog_timeout: Duration::from_secs(10),
        }
    }
}

impl StorefrontConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("STOREFRONT_ADDR") {
            cfg.bind_addr = parse_value("STOREFRONT_ADDR", &v)?;
        }
        if let Some(v) = lookup("STOREFRONT_WORKERS") {
            cfg.max_workers = parse_value("STOREFRONT_WORKERS", &v)?;
            if cfg.max_workers == 0 {
                return Err(ConfigError::Invalid {
                    key: "STOREFRONT_WORKERS",
                    value: v,
                    reason: "must be at least 1".into(),
                });
            }
        }
        if let Some(v) = lookup("CATALOG_API_URL") {
            cfg.catalog_api_url = parse_base_url("CATALOG_API_URL", &v)?;
        }
        if let Some(v) = lookup("ASSET_BASE_URL") {
            cfg.asset_base_url = parse_base_url("ASSET_BASE_URL", &v)?;
        }
        if let Some(v) = lookup("ACCOUNT_APP_URL") {
            cfg.account_app_url = parse_base_url("ACCOUNT_APP_URL", &v)?;
        }
        if let Some(v) = lookup("CATALOG_TIMEOUT_SECS") {
            let secs: u64 = parse_value("CATALOG_TIMEOUT_SECS", &v)?;
            cfg.catalog_timeout = Duration::from_secs(secs);
        }

        Ok(cfg)
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

// Validated with `url`, stored without the trailing slash so paths can be appended.
fn parse_base_url(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    url::Url::parse(trimmed).map_err(|e| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    Ok(trimmed.trim_end_matches('/').to_string())
}
