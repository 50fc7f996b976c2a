use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "http://dataservice.accuweather.com";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Process configuration, built once at startup and passed explicitly
/// to the service and the router.
///
/// Example TOML:
/// port = 3000
/// api_key = "..."
/// public_dir = "public"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// AccuWeather base URL, without a trailing path.
    pub base_url: String,

    /// Directory served for every path outside `/api`.
    pub public_dir: PathBuf,

    /// Outbound request timeout. `None` leaves the transport default in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_file(&path)?.with_env(std::env::vars())
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Apply `PORT`, `ACCUWEATHER_API_KEY`, `ACCUWEATHER_BASE_URL` and
    /// `WEATHER_PUBLIC_DIR` on top of the current values.
    pub fn with_env<I>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            match name.as_str() {
                "PORT" => {
                    self.port = value
                        .trim()
                        .parse()
                        .with_context(|| format!("Invalid PORT value '{value}'"))?;
                }
                "ACCUWEATHER_API_KEY" if !value.is_empty() => self.api_key = Some(value),
                "ACCUWEATHER_BASE_URL" if !value.is_empty() => self.base_url = value,
                "WEATHER_PUBLIC_DIR" if !value.is_empty() => self.public_dir = value.into(),
                _ => {}
            }
        }

        Ok(self)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The configured key, or an empty string. A missing key is not an
    /// error here: the provider rejects it on the first request.
    pub fn api_key_or_empty(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
