//! Domain records and HTTP DTOs for the forecast service
//!
//! The normalized forecast is the internal shape shared by the weather client,
//! the cache and the API; requests and responses are the JSON bodies.

pub mod forecast;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use forecast::{CurrentConditions, DayForecast, NormalizedForecast};
pub use requests::ForecastRequest;
pub use responses::{
    ErrorResponse, FieldErrorBody, ForecastResponse, HealthResponse, StatsResponse,
    ValidationErrorResponse,
};
