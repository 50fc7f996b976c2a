use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    Config,
    config::DEFAULT_BASE_URL,
    upstream::{UpstreamConditions, UpstreamForecast, UpstreamLocation},
};

use super::WeatherProvider;

const LOCATION_SEARCH_PATH: &str = "locations/v1/cities/search";
const CURRENT_CONDITIONS_PATH: &str = "currentconditions/v1";
const DAILY_FORECAST_PATH: &str = "forecasts/v1/daily/5day";

#[derive(Debug, Clone)]
pub struct AccuWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl AccuWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self { api_key, base_url: base_url.into(), http: Client::new() }
    }

    /// Build a provider from process configuration. A configured timeout is
    /// applied to every request; otherwise the reqwest default is kept.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build AccuWeather HTTP client")?;

        Ok(Self {
            api_key: config.api_key_or_empty().to_string(),
            base_url: config.base_url.clone(),
            http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        what: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let res = self
            .http
            .get(url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send request to AccuWeather ({what})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read AccuWeather {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "AccuWeather {} request failed with status {}: {}",
                what,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse AccuWeather {what} JSON"))
    }
}

#[async_trait]
impl WeatherProvider for AccuWeatherProvider {
    #[instrument(skip(self))]
    async fn search_locations(&self, query: &str) -> Result<Vec<UpstreamLocation>> {
        let url = self.endpoint(LOCATION_SEARCH_PATH);

        // `null` counts as "no match", same as `[]`.
        let found: Option<Vec<UpstreamLocation>> =
            self.get_json("location search", &url, &[("q", query)]).await?;
        let found = found.unwrap_or_default();

        debug!(matches = found.len(), "location search finished");
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn current_conditions(&self, location_key: &str) -> Result<Vec<UpstreamConditions>> {
        let url = self.endpoint(&format!("{CURRENT_CONDITIONS_PATH}/{location_key}"));

        let records: Option<Vec<UpstreamConditions>> =
            self.get_json("current conditions", &url, &[]).await?;
        let records = records.unwrap_or_default();

        debug!(records = records.len(), "current conditions fetched");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn daily_forecast(&self, location_key: &str) -> Result<UpstreamForecast> {
        let url = self.endpoint(&format!("{DAILY_FORECAST_PATH}/{location_key}"));

        let forecast: UpstreamForecast = self.get_json("5-day forecast", &url, &[]).await?;

        debug!(days = forecast.daily_forecasts.len(), "daily forecast fetched");
        Ok(forecast)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
