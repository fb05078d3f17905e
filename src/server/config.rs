//! Environment configuration.
//!
//! Every setting has a documented default so the front-end starts with no environment at
//! all inside the compose network, where the books API is reachable as `http://api:8000`.

use crate::server::error::config::ConfigError;

/// Default upstream books API base URL.
pub const DEFAULT_API_URL: &str = "http://api:8000";
/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the upstream books API (`API_INTERNAL_URL`).
    pub api_url: String,
    /// Address the HTTP listener binds to (`BIND_ADDRESS`).
    pub bind_address: String,
    /// Redis/Valkey URL for the session store (`VALKEY_URL`); in-memory sessions when unset.
    pub valkey_url: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = var("API_INTERNAL_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: "API_INTERNAL_URL".to_string(),
                reason: format!("expected an http:// or https:// URL, got {api_url:?}"),
            });
        }

        let bind_address =
            var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        if !bind_address.contains(':') {
            return Err(ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: format!("expected host:port, got {bind_address:?}"),
            });
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            bind_address,
            valkey_url: var("VALKEY_URL"),
        })
    }
}
