//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::weather::DEFAULT_BASE_URL;

/// Environment variable holding the WeatherAPI key.
pub const DEFAULT_API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The API key itself is not stored here; the weather client reads
/// `api_key_var` on every request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the variable holding the provider API key
    pub api_key_var: String,
    /// Provider API root, without the `/forecast.json` suffix
    pub weather_api_base_url: String,
    /// Seconds a fetched forecast stays cached
    pub forecast_ttl: u64,
    /// Outbound request timeout in seconds
    pub http_timeout: u64,
    /// Maximum number of postal codes cached at once
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WEATHER_API_BASE_URL` - Provider API root (default: https://api.weatherapi.com/v1)
    /// - `FORECAST_TTL_SECS` - Cache lifetime of a forecast (default: 1800)
    /// - `HTTP_TIMEOUT_SECS` - Outbound request timeout (default: 10)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key_var: defaults.api_key_var,
            weather_api_base_url: env::var("WEATHER_API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.weather_api_base_url),
            forecast_ttl: parse_var("FORECAST_TTL_SECS").unwrap_or(defaults.forecast_ttl),
            http_timeout: parse_var("HTTP_TIMEOUT_SECS").unwrap_or(defaults.http_timeout),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Cache lifetime as a Duration.
    pub fn forecast_ttl(&self) -> Duration {
        Duration::from_secs(self.forecast_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            weather_api_base_url: DEFAULT_BASE_URL.to_string(),
            forecast_ttl: 30 * 60,
            http_timeout: 10,
            max_entries: 1000,
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_key_var, "WEATHER_API_KEY");
        assert_eq!(config.weather_api_base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.forecast_ttl(), Duration::from_secs(1800));
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("WEATHER_API_BASE_URL");
        env::remove_var("FORECAST_TTL_SECS");
        env::remove_var("HTTP_TIMEOUT_SECS");
        env::remove_var("MAX_ENTRIES");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.weather_api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.forecast_ttl, 1800);
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("ZIP_FORECAST_TEST_GARBAGE", "not-a-number");
        assert_eq!(parse_var::<u64>("ZIP_FORECAST_TEST_GARBAGE"), None);

        env::set_var("ZIP_FORECAST_TEST_NUMBER", " 42 ");
        assert_eq!(parse_var::<u64>("ZIP_FORECAST_TEST_NUMBER"), Some(42));
    }
}
