//! Runtime configuration for the proxy, read once from the environment.
//!
//! Optional:
//! - `OPENWEATHERMAP_API_KEY` – provider key; without it the data endpoints answer 500
//! - `PORT` – listen port (default: 5000)
//! - `PROVIDER_BASE_URL` – provider root (default: `https://api.openweathermap.org`)

use std::env;

use anyhow::{anyhow, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub port: u16,
    pub provider_base_url: String,
}

impl Config {
    pub fn load_from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = var("PORT")
            .map(|v| v.trim().parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid PORT: {}", e))?
            .unwrap_or(DEFAULT_PORT);

        let provider_base_url = var("PROVIDER_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_PROVIDER_BASE_URL.to_string());

        Ok(Self {
            api_key: var("OPENWEATHERMAP_API_KEY"),
            port,
            provider_base_url,
        })
    }

    pub fn log_config(&self) {
        tracing::info!("Config:");
        tracing::info!("  port: {}", self.port);
        tracing::info!("  provider_base_url: {}", self.provider_base_url);
        if self.api_key.is_some() {
            tracing::info!("  api_key: configured");
        } else {
            tracing::warn!("  api_key: missing, data endpoints will fail");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.provider_base_url, DEFAULT_PROVIDER_BASE_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn reads_values() {
        let config = config_from(&[
            ("OPENWEATHERMAP_API_KEY", "abc123"),
            ("PORT", "8080"),
            ("PROVIDER_BASE_URL", "http://127.0.0.1:9000/"),
        ])
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.provider_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = config_from(&[("OPENWEATHERMAP_API_KEY", "  ")]).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }
}
