use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weather_core::Config;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather lookup HTTP server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default).
    Serve {
        /// Port to listen on; overrides `PORT` and the config file.
        #[arg(long)]
        port: Option<u16>,

        /// Directory with static front-end files.
        #[arg(long)]
        public_dir: Option<PathBuf>,
    },

    /// Store the AccuWeather API key in the config file.
    Configure {
        /// Key to store; prompted for when absent.
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Serve { port: None, public_dir: None }) {
            Command::Serve { port, public_dir } => {
                let mut config = Config::load()?;
                if let Some(port) = port {
                    config.port = port;
                }
                if let Some(dir) = public_dir {
                    config.public_dir = dir;
                }
                weather_server::serve(config).await
            }
            Command::Configure { api_key } => configure(api_key),
        }
    }
}

fn configure(api_key: Option<String>) -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_file(&path)?;

    let api_key = match api_key {
        Some(key) => key,
        None => inquire::Password::new("AccuWeather API key:")
            .without_confirmation()
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .prompt()
            .context("Failed to read API key")?,
    };

    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key);
    config.save_to(&path)?;

    println!("Saved API key to {}", path.display());
    Ok(())
}
