//! Address Validator
//!
//! Checks a [`ForecastRequest`] for required fields and a US postal code
//! format. Pure: no I/O, no logging. Every failing field is reported; the
//! checks never stop at the first problem.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::models::ForecastRequest;

/// `12345` or `12345-6789`, ASCII digits only.
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("postal code pattern is valid"));

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Empty, whitespace-only, or absent
    MissingField,
    /// Present but not in the expected shape
    InvalidFormat,
}

impl FieldErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldErrorKind::MissingField => "missing_field",
            FieldErrorKind::InvalidFormat => "invalid_format",
        }
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldErrorKind::MissingField,
        }
    }

    pub fn invalid_format(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldErrorKind::InvalidFormat,
        }
    }

    /// Human readable message for the form.
    pub fn message(&self) -> String {
        match self.kind {
            FieldErrorKind::MissingField => format!("{} can't be blank", self.field),
            FieldErrorKind::InvalidFormat => {
                format!("{} should be in the format 12345 or 12345-6789", self.field)
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// All field failures of one request, in field order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("invalid forecast request: {}", join_messages(.0))]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Errors recorded against a single field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::message)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns true if `value` is a 5-digit or ZIP+4 postal code.
pub fn is_valid_postal_code(value: &str) -> bool {
    POSTAL_CODE.is_match(value)
}

/// Validates only the postal code, for callers that have no full address.
pub fn validate_postal_code(postal_code: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_postal_code(postal_code, &mut errors);
    errors.into_result()
}

/// Validates a forecast request.
///
/// Reports `MissingField` for each blank field and `InvalidFormat` for a
/// present postal code that is not `12345` or `12345-6789`.
pub fn validate(request: &ForecastRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    for (field, value) in [
        ("street", &request.street),
        ("city", &request.city),
        ("state", &request.state),
    ] {
        if is_blank(value) {
            errors.push(FieldError::missing(field));
        }
    }
    check_postal_code(&request.postal_code, &mut errors);

    errors.into_result()
}

fn check_postal_code(postal_code: &str, errors: &mut FieldErrors) {
    if is_blank(postal_code) {
        errors.push(FieldError::missing("postal_code"));
    } else if !is_valid_postal_code(postal_code) {
        errors.push(FieldError::invalid_format("postal_code"));
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
