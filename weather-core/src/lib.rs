//! Core library for the weather proxy server.
//!
//! This crate defines:
//! - Configuration (file, environment)
//! - The upstream provider contract and its AccuWeather implementation
//! - The report model served to clients
//! - The lookup pipeline tying them together
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod upstream;

pub use config::Config;
pub use error::LookupError;
pub use model::{CurrentConditions, DailyForecastEntry, LocationMatch, WeatherReport};
pub use provider::{WeatherProvider, accuweather::AccuWeatherProvider};
pub use service::WeatherLookupService;
