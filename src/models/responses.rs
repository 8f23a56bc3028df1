//! Response DTOs for the forecast API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::NormalizedForecast;
use crate::validation::FieldErrors;

/// Response body for a successful forecast lookup
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    /// Postal code the forecast was fetched for
    pub postal_code: String,
    /// True when served from the cache
    pub cached: bool,
    pub forecast: NormalizedForecast,
}

impl ForecastResponse {
    pub fn new(postal_code: impl Into<String>, cached: bool, forecast: NormalizedForecast) -> Self {
        Self {
            postal_code: postal_code.into(),
            cached,
            forecast,
        }
    }
}

/// One rejected field in a validation response
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorBody {
    pub field: String,
    /// `missing_field` or `invalid_format`
    pub code: String,
    pub message: String,
}

/// Response body for a request that failed validation (422)
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub fields: Vec<FieldErrorBody>,
}

impl ValidationErrorResponse {
    pub fn from_errors(errors: &FieldErrors) -> Self {
        Self {
            error: "Invalid forecast request".to_string(),
            fields: errors
                .iter()
                .map(|e| FieldErrorBody {
                    field: e.field.to_string(),
                    code: e.kind.as_str().to_string(),
                    message: e.message(),
                })
                .collect(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Outbound calls made to the weather provider
    pub provider_calls: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, provider_calls: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            provider_calls,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for fetch failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
