use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
    Config, LookupError,
    model::{CurrentConditions, DailyForecastEntry, LocationMatch, WeatherReport},
    provider::{WeatherProvider, accuweather::AccuWeatherProvider},
};

/// Resolves a city, then fetches current conditions and the 5-day forecast
/// for it. Calls are issued one after another; the first failure aborts the
/// lookup and nothing from earlier calls is returned.
#[derive(Debug, Clone)]
pub struct WeatherLookupService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherLookupService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Service backed by AccuWeather, configured from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = AccuWeatherProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider)))
    }

    #[instrument(skip(self))]
    pub async fn lookup_weather(&self, city: &str) -> Result<WeatherReport, LookupError> {
        if city.trim().is_empty() {
            return Err(LookupError::LocationNotFound);
        }

        // With several candidates the first one wins; no disambiguation.
        let location: LocationMatch = self
            .provider
            .search_locations(city)
            .await?
            .into_iter()
            .next()
            .map(LocationMatch::from)
            .ok_or(LookupError::LocationNotFound)?;

        let current = self
            .provider
            .current_conditions(&location.key)
            .await?
            .first()
            .map(CurrentConditions::from)
            .ok_or(LookupError::ConditionsNotFound)?;

        // An empty forecast is passed through, not treated as "not found".
        let forecast: Vec<DailyForecastEntry> = self
            .provider
            .daily_forecast(&location.key)
            .await?
            .daily_forecasts
            .iter()
            .map(DailyForecastEntry::from)
            .collect();

        info!(key = %location.key, name = %location.name, days = forecast.len(), "weather resolved");

        Ok(WeatherReport { location, current, forecast })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{UpstreamConditions, UpstreamForecast, UpstreamLocation};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Stage {
        Search,
        Current,
        Forecast,
    }

    #[derive(Debug)]
    struct StubProvider {
        locations: serde_json::Value,
        conditions: serde_json::Value,
        forecast: serde_json::Value,
        fail_at: Option<Stage>,
        calls: Mutex<Vec<(Stage, String)>>,
    }

    impl StubProvider {
        fn healthy() -> Self {
            Self {
                locations: json!([
                    { "Key": "12345", "LocalizedName": "Springfield",
                      "Country": { "ID": "US", "LocalizedName": "United States" } },
                    { "Key": "99999", "LocalizedName": "Springfield",
                      "Country": { "ID": "AU", "LocalizedName": "Australia" } }
                ]),
                conditions: json!([{
                    "LocalObservationDateTime": "2024-01-01T12:00:00-05:00",
                    "WeatherText": "Sunny",
                    "WeatherIcon": 1,
                    "HasPrecipitation": false,
                    "PrecipitationType": null,
                    "IsDayTime": true,
                    "Temperature": {
                        "Metric": { "Value": 20 },
                        "Imperial": { "Value": 68 }
                    }
                }]),
                forecast: json!({
                    "DailyForecasts": [
                        day("2024-01-01T07:00:00-05:00", 41, 59),
                        day("2024-01-02T07:00:00-05:00", 32, 50),
                    ]
                }),
                fail_at: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, stage: Stage, arg: &str) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push((stage, arg.to_string()));
            if self.fail_at == Some(stage) {
                return Err(anyhow!("connection reset"));
            }
            Ok(())
        }

        fn stages(&self) -> Vec<Stage> {
            self.calls.lock().unwrap().iter().map(|(s, _)| *s).collect()
        }
    }

    fn day(date: &str, min: i32, max: i32) -> serde_json::Value {
        json!({
            "Date": date,
            "Temperature": { "Minimum": { "Value": min }, "Maximum": { "Value": max } },
            "Day": { "IconPhrase": "Sunny", "HasPrecipitation": false },
            "Night": { "IconPhrase": "Clear", "HasPrecipitation": false }
        })
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn search_locations(&self, query: &str) -> anyhow::Result<Vec<UpstreamLocation>> {
            self.record(Stage::Search, query)?;
            Ok(serde_json::from_value(self.locations.clone())?)
        }

        async fn current_conditions(&self, key: &str) -> anyhow::Result<Vec<UpstreamConditions>> {
            self.record(Stage::Current, key)?;
            Ok(serde_json::from_value(self.conditions.clone())?)
        }

        async fn daily_forecast(&self, key: &str) -> anyhow::Result<UpstreamForecast> {
            self.record(Stage::Forecast, key)?;
            Ok(serde_json::from_value(self.forecast.clone())?)
        }
    }

    fn service(stub: StubProvider) -> (WeatherLookupService, Arc<StubProvider>) {
        let stub = Arc::new(stub);
        (WeatherLookupService::new(stub.clone()), stub)
    }

    #[tokio::test]
    async fn builds_full_report() {
        let (svc, stub) = service(StubProvider::healthy());

        let report = svc.lookup_weather("Springfield").await.expect("lookup");

        assert_eq!(report.location.key, "12345");
        assert_eq!(report.location.country, "United States");
        assert_eq!(report.current.weather_text, "Sunny");
        assert_eq!(report.current.temperature.metric, 20.0);
        assert_eq!(report.forecast.len(), 2);
        assert_eq!(report.forecast[0].temperature.min.metric, 5.0);
        assert_eq!(report.forecast[0].temperature.max.metric, 15.0);
        assert_eq!(report.forecast[1].date, "2024-01-02T07:00:00-05:00");

        let calls = stub.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                (Stage::Search, "Springfield".to_string()),
                (Stage::Current, "12345".to_string()),
                (Stage::Forecast, "12345".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn no_location_match_is_not_found() {
        let (svc, stub) = service(StubProvider { locations: json!([]), ..StubProvider::healthy() });

        let err = svc.lookup_weather("Atlantis").await.unwrap_err();

        assert!(matches!(err, LookupError::LocationNotFound));
        assert_eq!(stub.stages(), vec![Stage::Search]);
    }

    #[tokio::test]
    async fn blank_city_never_reaches_provider() {
        let (svc, stub) = service(StubProvider::healthy());

        let err = svc.lookup_weather("   ").await.unwrap_err();

        assert!(matches!(err, LookupError::LocationNotFound));
        assert!(stub.stages().is_empty());
    }

    #[tokio::test]
    async fn empty_conditions_is_not_found() {
        let (svc, stub) =
            service(StubProvider { conditions: json!([]), ..StubProvider::healthy() });

        let err = svc.lookup_weather("Springfield").await.unwrap_err();

        assert!(matches!(err, LookupError::ConditionsNotFound));
        assert_eq!(stub.stages(), vec![Stage::Search, Stage::Current]);
    }

    #[tokio::test]
    async fn empty_forecast_is_not_an_error() {
        let (svc, _) = service(StubProvider {
            forecast: json!({ "DailyForecasts": [] }),
            ..StubProvider::healthy()
        });

        let report = svc.lookup_weather("Springfield").await.expect("lookup");

        assert!(report.forecast.is_empty());
    }

    #[tokio::test]
    async fn failure_at_any_stage_is_upstream_error() {
        for stage in [Stage::Search, Stage::Current, Stage::Forecast] {
            let (svc, _) = service(StubProvider { fail_at: Some(stage), ..StubProvider::healthy() });

            let err = svc.lookup_weather("Springfield").await.unwrap_err();

            assert!(matches!(err, LookupError::Upstream(_)), "stage {stage:?} gave {err:?}");
            assert!(!err.is_not_found());
        }
    }
}
