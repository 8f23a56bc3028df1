//! API Handlers
//!
//! HTTP request handlers for each forecast service endpoint. Each forecast
//! handler validates first, then asks the fetcher; the three outcomes map to
//! 200, 422 and 502.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::fetcher::ForecastFetcher;
use crate::models::{ForecastRequest, ForecastResponse, HealthResponse, StatsResponse};
use crate::validation;
use crate::weather::{ForecastSource, WeatherClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<ForecastFetcher>,
    /// The fetcher's cache, kept here for stats and cleanup
    pub cache: MemoryCache,
}

impl AppState {
    /// Wires a forecast source to an in-memory cache.
    pub fn new(
        source: Arc<dyn ForecastSource>,
        cache: MemoryCache,
        ttl: std::time::Duration,
    ) -> Self {
        let fetcher = ForecastFetcher::new(source, Arc::new(cache.clone()), ttl);
        Self {
            fetcher: Arc::new(fetcher),
            cache,
        }
    }

    /// Creates the production state: WeatherAPI client plus memory cache.
    pub fn from_config(config: &Config) -> std::result::Result<Self, FetchError> {
        let client = WeatherClient::from_config(config)?;
        let cache = MemoryCache::new(config.max_entries);
        Ok(Self::new(Arc::new(client), cache, config.forecast_ttl()))
    }
}

/// Handler for POST /forecast
///
/// Validates the full address, then returns the forecast for its postal code.
pub async fn create_forecast_handler(
    State(state): State<AppState>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>> {
    if let Err(errors) = req.validate() {
        debug!("Rejected forecast request: {}", errors);
        return Err(errors.into());
    }

    let lookup = state.fetcher.lookup(&req.postal_code).await?;
    Ok(Json(ForecastResponse::new(
        req.postal_code,
        lookup.cached,
        lookup.forecast,
    )))
}

/// Handler for GET /forecast/:postal_code
pub async fn get_forecast_handler(
    State(state): State<AppState>,
    Path(postal_code): Path<String>,
) -> Result<Json<ForecastResponse>> {
    validation::validate_postal_code(&postal_code)?;

    let lookup = state.fetcher.lookup(&postal_code).await?;
    Ok(Json(ForecastResponse::new(
        postal_code,
        lookup.cached,
        lookup.forecast,
    )))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::new(&stats, state.fetcher.provider_calls()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
