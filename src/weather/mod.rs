//! Weather Client Module
//!
//! Outbound forecast fetching and normalization of the provider payload.

mod client;
mod normalize;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::NormalizedForecast;

pub use client::{ApiKey, WeatherClient, DEFAULT_BASE_URL};
pub use normalize::{normalize, RawForecast, FORECAST_DAYS};

/// Anything that can produce a normalized forecast for a postal code.
///
/// [`WeatherClient`] is the production source; the fetcher depends only on
/// this trait.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetches a fresh forecast. A failure is terminal for this call.
    async fn fetch_raw(&self, postal_code: &str) -> Result<NormalizedForecast, FetchError>;
}
