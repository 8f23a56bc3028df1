//! Normalized forecast shape
//!
//! The internal record the weather client produces and the cache stores.
//! Every value read from the provider is optional so a missing nested field
//! degrades to `null` instead of failing the whole forecast.

use serde::{Deserialize, Serialize};

/// Current conditions at the requested location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location name, optionally suffixed with ", <region>"
    pub location: Option<String>,
    /// Temperature in Fahrenheit, passed through unchanged
    pub temperature: Option<f64>,
    /// Condition text (e.g. "Sunny")
    pub condition: Option<String>,
    /// Condition icon URL as given by the provider
    pub icon_url: Option<String>,
    /// Provider timestamp of the observation, kept opaque
    pub last_updated: Option<String>,
}

/// Forecast for a single day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Calendar date, YYYY-MM-DD
    pub date: Option<String>,
    pub icon_url: Option<String>,
    /// Daily maximum in Fahrenheit
    pub max_temp: Option<f64>,
    /// Daily minimum in Fahrenheit
    pub min_temp: Option<f64>,
    pub condition: Option<String>,
}

/// Current conditions plus up to four days of forecast, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedForecast {
    pub current: CurrentConditions,
    pub days: Vec<DayForecast>,
}
