//! API Module
//!
//! Thin HTTP adapter over the validator and the forecast fetcher.
//!
//! # Endpoints
//! - `POST /forecast` - Validate an address and return its forecast
//! - `GET /forecast/:postal_code` - Forecast for a postal code
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
