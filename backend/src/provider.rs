//! Client for the upstream weather provider.
//!
//! Each proxied route is described by an [`Endpoint`]; the provider builds
//! the upstream URL, injects the API key and maps the outcome onto
//! [`ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// One upstream resource and the messages reported when it cannot be served.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub path: &'static str,
    pub extra_params: &'static [(&'static str, &'static str)],
    pub missing_key: &'static str,
    pub failure: &'static str,
}

#[derive(Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: config.provider_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch `endpoint` for the given coordinates, forwarded verbatim.
    pub async fn fetch(&self, endpoint: &Endpoint, lat: &str, lon: &str) -> ApiResult<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey(endpoint.missing_key))?;

        let mut params: Vec<(&str, &str)> = vec![("lat", lat), ("lon", lon)];
        params.extend_from_slice(endpoint.extra_params);
        params.push(("appid", api_key));

        let url = Url::parse_with_params(&format!("{}{}", self.base_url, endpoint.path), &params)
            .map_err(|e| {
                tracing::error!("Invalid provider URL for {}: {}", endpoint.path, e);
                ApiError::Fetch(endpoint.failure)
            })?;

        tracing::debug!("Fetching {} (lat={}, lon={})", endpoint.path, lat, lon);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Provider request to {} failed: {}", endpoint.path, e);
            ApiError::Fetch(endpoint.failure)
        })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            tracing::error!("Provider response from {} unreadable: {}", endpoint.path, e);
            ApiError::Fetch(endpoint.failure)
        })?;

        if !status.is_success() {
            tracing::warn!("Provider returned {} for {}", status, endpoint.path);
            return Err(ApiError::Upstream { status, body });
        }

        Ok(body)
    }
}
