use serde::{Deserialize, Serialize};

use crate::upstream::{
    UpstreamConditions, UpstreamDailyForecast, UpstreamLocation, UpstreamPeriod, UpstreamValue,
};

/// The unified document returned by `GET /api/weather/{city}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: LocationMatch,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecastEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMatch {
    pub name: String,
    pub country: String,
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub metric: f64,
    pub imperial: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: Temperature,
    pub weather_text: String,
    pub weather_icon: i32,
    #[serde(rename = "hasRain")]
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
    pub is_day_time: bool,
    pub observation_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: Temperature,
    pub max: Temperature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub icon_phrase: String,
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    pub date: String,
    pub temperature: TemperatureRange,
    pub day: PeriodSummary,
    pub night: PeriodSummary,
}

impl From<UpstreamLocation> for LocationMatch {
    fn from(loc: UpstreamLocation) -> Self {
        Self { name: loc.localized_name, country: loc.country.localized_name, key: loc.key }
    }
}

impl From<&UpstreamConditions> for CurrentConditions {
    /// Values are copied verbatim; no unit conversion happens here.
    fn from(c: &UpstreamConditions) -> Self {
        Self {
            temperature: Temperature {
                metric: c.temperature.metric.value,
                imperial: c.temperature.imperial.value,
            },
            weather_text: c.weather_text.clone(),
            weather_icon: c.weather_icon,
            has_precipitation: c.has_precipitation,
            precipitation_type: c.precipitation_type.clone(),
            is_day_time: c.is_day_time,
            observation_time: c.local_observation_date_time.clone(),
        }
    }
}

impl From<&UpstreamPeriod> for PeriodSummary {
    fn from(p: &UpstreamPeriod) -> Self {
        Self {
            icon_phrase: p.icon_phrase.clone(),
            has_precipitation: p.has_precipitation,
            precipitation_type: p.precipitation_type.clone(),
        }
    }
}

impl From<&UpstreamDailyForecast> for DailyForecastEntry {
    fn from(d: &UpstreamDailyForecast) -> Self {
        Self {
            date: d.date.clone(),
            temperature: TemperatureRange {
                min: from_forecast_value(&d.temperature.minimum),
                max: from_forecast_value(&d.temperature.maximum),
            },
            day: PeriodSummary::from(&d.day),
            night: PeriodSummary::from(&d.night),
        }
    }
}

/// Forecast values are requested without `metric=true`, so upstream sends
/// Fahrenheit. The metric field is derived from it; the imperial field
/// passes through untouched.
fn from_forecast_value(v: &UpstreamValue) -> Temperature {
    Temperature { metric: fahrenheit_to_celsius(v.value), imperial: v.value }
}

/// `(f - 32) * 5 / 9`, rounded to one decimal place.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    round_to_tenths((f - 32.0) * 5.0 / 9.0)
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
