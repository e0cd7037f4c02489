//! Frontend Configuration
//!
//! A CSR bundle has no process environment, so settings are baked in at
//! build time through `TODO_API_URL` and `TODO_LOG_LEVEL`.

use url::Url;

use crate::error::{Error, Result};

/// Collection endpoint used when `TODO_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/todos";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Collection endpoint; item addresses are derived from it
    pub api_url: Url,
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API url is valid"),
            log_level: log::Level::Info,
        }
    }
}

impl Config {
    /// Resolve from the variables captured when the bundle was compiled
    pub fn from_build_env() -> Result<Self> {
        Self::from_values(option_env!("TODO_API_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = api_url.map(str::trim).filter(|v| !v.is_empty()) {
            config.api_url = Url::parse(value).map_err(|source| Error::InvalidApiUrl {
                value: value.to_string(),
                source,
            })?;
        }

        if let Some(value) = log_level.map(str::trim).filter(|v| !v.is_empty()) {
            config.log_level = value.parse().map_err(|source| Error::InvalidLogLevel {
                value: value.to_string(),
                source,
            })?;
        }

        Ok(config)
    }
}
