//! Request DTOs for the forecast API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::validation::{self, FieldErrors};

/// Request body for POST /forecast
///
/// Absent fields deserialize as empty strings, so a missing field and a blank
/// one fail validation the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    /// Also accepted as `zip_code`
    #[serde(default, alias = "zip_code")]
    pub postal_code: String,
}

impl ForecastRequest {
    /// Creates a request from its four address parts.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
        }
    }

    /// Validates the request. See [`validation::validate`].
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validation::validate(self)
    }
}
