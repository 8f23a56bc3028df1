//! Zip Forecast - validated, cached weather forecasts by postal code
//!
//! Validates an address, fetches a four-day forecast for its postal code from
//! WeatherAPI, normalizes it, and caches it for thirty minutes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod tasks;
pub mod validation;
pub mod weather;

pub use api::AppState;
pub use config::Config;
pub use error::{CacheError, FetchError};
pub use fetcher::{ForecastFetcher, ForecastLookup};
pub use models::{ForecastRequest, NormalizedForecast};
pub use tasks::spawn_cleanup_task;
pub use validation::{validate, FieldErrors};
