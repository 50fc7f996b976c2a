use async_trait::async_trait;
use std::fmt::Debug;

use crate::upstream::{UpstreamConditions, UpstreamForecast, UpstreamLocation};

pub mod accuweather;

/// The three upstream endpoints the lookup pipeline depends on.
///
/// Implementations return raw upstream records; emptiness checks and
/// projection into the report happen in [`crate::WeatherLookupService`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// City search. An empty vector means nothing matched.
    async fn search_locations(&self, query: &str) -> anyhow::Result<Vec<UpstreamLocation>>;

    /// Current conditions for a location key. Usually a single record.
    async fn current_conditions(
        &self,
        location_key: &str,
    ) -> anyhow::Result<Vec<UpstreamConditions>>;

    /// 5-day daily forecast for a location key.
    async fn daily_forecast(&self, location_key: &str) -> anyhow::Result<UpstreamForecast>;
}
