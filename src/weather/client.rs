//! WeatherAPI forecast client.

use std::env;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::FetchError;
use crate::models::NormalizedForecast;
use crate::weather::normalize::{normalize, RawForecast, FORECAST_DAYS};
use crate::weather::ForecastSource;

/// Public WeatherAPI endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Longest slice of an error body kept in [`FetchError::Status`].
const MAX_ERROR_BODY: usize = 500;

/// Where the provider API key comes from.
#[derive(Clone)]
pub enum ApiKey {
    /// Read from this environment variable on every request
    Env(String),
    /// Fixed value
    Fixed(String),
}

impl ApiKey {
    /// Current key value; `None` when unset or blank.
    pub fn resolve(&self) -> Option<String> {
        let value = match self {
            ApiKey::Env(var) => env::var(var).ok()?,
            ApiKey::Fixed(value) => value.clone(),
        };
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKey::Env(var) => f.debug_tuple("Env").field(var).finish(),
            ApiKey::Fixed(_) => f.write_str("Fixed(<redacted>)"),
        }
    }
}

/// Fetches and normalizes forecasts from WeatherAPI.
///
/// One attempt per call, no retries. The transport is an injected
/// [`reqwest::Client`]; build it with a timeout.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Builds a client with its own HTTP transport from configuration.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;

        Ok(Self::new(
            http,
            config.weather_api_base_url.clone(),
            ApiKey::Env(config.api_key_var.clone()),
        ))
    }

    /// Full URL of the forecast endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/forecast.json", self.base_url)
    }
}

#[async_trait]
impl ForecastSource for WeatherClient {
    #[instrument(skip(self), level = "info")]
    async fn fetch_raw(&self, postal_code: &str) -> Result<NormalizedForecast, FetchError> {
        let key = self.api_key.resolve().ok_or(FetchError::MissingApiKey)?;

        let query = [
            ("key", key),
            ("q", postal_code.to_string()),
            ("days", FORECAST_DAYS.to_string()),
            ("aqi", "no".to_string()),
            ("alerts", "no".to_string()),
        ];

        let response = self.http.get(self.endpoint()).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let bytes = response.bytes().await?;
        let raw: RawForecast =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Malformed(e.to_string()))?;

        let forecast = normalize(raw);
        debug!(
            "Fetched forecast for {}: {} day(s)",
            postal_code,
            forecast.days.len()
        );
        Ok(forecast)
    }
}
