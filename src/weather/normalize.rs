//! Provider payload DTOs and normalization.
//!
//! The provider response is deeply nested and any part of it may be missing.
//! Every DTO field is optional with a default, so an absent path becomes
//! `None`; only values of the wrong JSON type make the payload malformed.

use serde::Deserialize;

use crate::models::{CurrentConditions, DayForecast, NormalizedForecast};

/// Number of forecast days requested and kept.
pub const FORECAST_DAYS: usize = 4;

/// Top level of a `forecast.json` response.
#[derive(Debug, Default, Deserialize)]
pub struct RawForecast {
    #[serde(default)]
    pub location: Option<RawLocation>,
    #[serde(default)]
    pub current: Option<RawCurrent>,
    #[serde(default)]
    pub forecast: Option<RawForecastBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCurrent {
    #[serde(default)]
    pub temp_f: Option<f64>,
    #[serde(default)]
    pub condition: Option<RawCondition>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCondition {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawForecastBlock {
    #[serde(default)]
    pub forecastday: Option<Vec<RawForecastDay>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawForecastDay {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub day: Option<RawDay>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDay {
    #[serde(default)]
    pub maxtemp_f: Option<f64>,
    #[serde(default)]
    pub mintemp_f: Option<f64>,
    #[serde(default)]
    pub condition: Option<RawCondition>,
}

/// Maps a provider payload onto the internal forecast shape.
///
/// Keeps at most [`FORECAST_DAYS`] days in provider order and passes
/// temperatures through unchanged.
pub fn normalize(raw: RawForecast) -> NormalizedForecast {
    let location = raw.location.unwrap_or_default();
    let current = raw.current.unwrap_or_default();
    let condition = current.condition.unwrap_or_default();

    let days = raw
        .forecast
        .and_then(|block| block.forecastday)
        .unwrap_or_default()
        .into_iter()
        .take(FORECAST_DAYS)
        .map(normalize_day)
        .collect();

    NormalizedForecast {
        current: CurrentConditions {
            location: location_label(location),
            temperature: current.temp_f,
            condition: condition.text,
            icon_url: condition.icon,
            last_updated: current.last_updated,
        },
        days,
    }
}

fn normalize_day(raw: RawForecastDay) -> DayForecast {
    let day = raw.day.unwrap_or_default();
    let condition = day.condition.unwrap_or_default();

    DayForecast {
        date: raw.date,
        icon_url: condition.icon,
        max_temp: day.maxtemp_f,
        min_temp: day.mintemp_f,
        condition: condition.text,
    }
}

/// "Name, Region" when a region is given, otherwise just the name.
fn location_label(location: RawLocation) -> Option<String> {
    let region = location.region.filter(|r| !r.trim().is_empty());
    match (location.name, region) {
        (Some(name), Some(region)) => Some(format!("{}, {}", name, region)),
        (name, _) => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> NormalizedForecast {
        normalize(serde_json::from_value(value).unwrap())
    }

    fn day(date: &str, max: f64, min: f64) -> serde_json::Value {
        json!({
            "date": date,
            "day": {
                "maxtemp_f": max,
                "mintemp_f": min,
                "condition": { "text": "Sunny", "icon": "day_icon_url" }
            }
        })
    }

    #[test]
    fn test_normalize_full_payload() {
        let forecast = parse(json!({
            "location": { "name": "City" },
            "current": {
                "temp_f": 75.4,
                "condition": { "text": "Clear", "icon": "icon_url" },
                "last_updated": "2024-08-26 12:00"
            },
            "forecast": {
                "forecastday": [day("2024-08-26", 80.0, 60.0), day("2024-08-27", 82.0, 62.0)]
            }
        }));

        assert_eq!(forecast.current.location.as_deref(), Some("City"));
        assert_eq!(forecast.current.temperature, Some(75.4));
        assert_eq!(forecast.current.condition.as_deref(), Some("Clear"));
        assert_eq!(forecast.current.icon_url.as_deref(), Some("icon_url"));
        assert_eq!(forecast.current.last_updated.as_deref(), Some("2024-08-26 12:00"));

        assert_eq!(forecast.days.len(), 2);
        assert_eq!(forecast.days[0].date.as_deref(), Some("2024-08-26"));
        assert_eq!(forecast.days[1].date.as_deref(), Some("2024-08-27"));
        assert_eq!(forecast.days[1].max_temp, Some(82.0));
        assert_eq!(forecast.days[1].min_temp, Some(62.0));
        assert_eq!(forecast.days[0].condition.as_deref(), Some("Sunny"));
    }

    #[test]
    fn test_normalize_truncates_to_four_days() {
        let days: Vec<_> = (1..=6)
            .map(|n| day(&format!("2024-08-0{n}"), 70.0 + n as f64, 50.0))
            .collect();
        let forecast = parse(json!({ "forecast": { "forecastday": days } }));

        let dates: Vec<_> = forecast.days.iter().map(|d| d.date.clone().unwrap()).collect();
        assert_eq!(dates, ["2024-08-01", "2024-08-02", "2024-08-03", "2024-08-04"]);
    }

    #[test]
    fn test_normalize_missing_day_list_is_empty() {
        let forecast = parse(json!({ "location": { "name": "City" } }));
        assert!(forecast.days.is_empty());

        let forecast = parse(json!({ "forecast": {} }));
        assert!(forecast.days.is_empty());
    }

    #[test]
    fn test_normalize_missing_nested_fields_are_none() {
        let forecast = parse(json!({
            "current": { "temp_f": 61 },
            "forecast": { "forecastday": [ { "date": "2024-08-26" } ] }
        }));

        assert_eq!(forecast.current.temperature, Some(61.0));
        assert_eq!(forecast.current.condition, None);
        assert_eq!(forecast.current.location, None);
        assert_eq!(forecast.days.len(), 1);
        assert_eq!(forecast.days[0].max_temp, None);
        assert_eq!(forecast.days[0].icon_url, None);
    }

    #[test]
    fn test_location_with_region() {
        let forecast = parse(json!({ "location": { "name": "Mesa", "region": "Arizona" } }));
        assert_eq!(forecast.current.location.as_deref(), Some("Mesa, Arizona"));

        let forecast = parse(json!({ "location": { "name": "Mesa", "region": " " } }));
        assert_eq!(forecast.current.location.as_deref(), Some("Mesa"));
    }

    #[test]
    fn test_wrong_json_type_is_rejected() {
        let result = serde_json::from_value::<RawForecast>(json!({ "current": { "temp_f": "hot" } }));
        assert!(result.is_err());
    }
}
