//! Wire shapes returned by the AccuWeather REST API.
//!
//! Only the fields the report projects are modelled; everything else in
//! the upstream payloads is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamLocation {
    pub key: String,
    pub localized_name: String,
    pub country: UpstreamCountry,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamCountry {
    pub localized_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamValue {
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamUnits {
    pub metric: UpstreamValue,
    pub imperial: UpstreamValue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamConditions {
    pub local_observation_date_time: String,
    pub weather_text: String,
    pub weather_icon: i32,
    pub has_precipitation: bool,
    #[serde(default)]
    pub precipitation_type: Option<String>,
    pub is_day_time: bool,
    pub temperature: UpstreamUnits,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamForecast {
    pub daily_forecasts: Vec<UpstreamDailyForecast>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamDailyForecast {
    pub date: String,
    pub temperature: UpstreamRange,
    pub day: UpstreamPeriod,
    pub night: UpstreamPeriod,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamRange {
    pub minimum: UpstreamValue,
    pub maximum: UpstreamValue,
}

/// Day or night half of a daily forecast.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamPeriod {
    pub icon_phrase: String,
    pub has_precipitation: bool,
    #[serde(default)]
    pub precipitation_type: Option<String>,
}
