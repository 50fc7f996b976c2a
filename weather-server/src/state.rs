use std::sync::Arc;

use weather_core::{Config, WeatherLookupService};

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: WeatherLookupService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(service: WeatherLookupService, config: Config) -> Self {
        Self { service, config: Arc::new(config) }
    }

    /// State backed by the AccuWeather provider described in `config`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let service = WeatherLookupService::from_config(&config)?;
        Ok(Self::new(service, config))
    }
}
