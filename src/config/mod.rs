//! # Configuration Management Module
//!
//! Typed, serde-backed settings for dexroll. Every section has defaults, so an
//! empty or missing `config.toml` is a valid configuration.
//!
//! ## Configuration Structure
//!
//! - [`ApiConfig`] - where the creature API lives and how long to wait for it
//! - [`RollConfig`] - id range, shiny odds, history size, fetch ordering
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dexroll::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config.toml").await?;
//!     println!("API: {}", config.api.base_url);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [api]
//! base_url = "https://pokeapi.co/api/v2"
//! timeout_seconds = 10
//!
//! [roll]
//! max_id = 1010
//! shiny_rate = 0.125
//! history_capacity = 50
//! concurrent_fetch = false
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tokio::fs;

use crate::dex::history::DEFAULT_HISTORY_CAPACITY;

/// Highest creature id the API served when the roller was written.
pub const DEFAULT_MAX_ID: u32 = 1010;
/// One roll in eight is shiny.
pub const DEFAULT_SHINY_RATE: f64 = 0.125;
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub roll: RollConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without trailing slash; `/pokemon/{id}` and `/pokemon-species/{id}` are appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollConfig {
    /// Ids are drawn uniformly from `1..=max_id`.
    #[serde(default = "default_max_id")]
    pub max_id: u32,
    /// Probability a roll is shiny.
    #[serde(default = "default_shiny_rate")]
    pub shiny_rate: f64,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Fetch creature and species concurrently instead of one after the other.
    #[serde(default)]
    pub concurrent_fetch: bool,
    /// Fixed RNG seed for reproducible sessions. Unset means OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_max_id() -> u32 {
    DEFAULT_MAX_ID
}

fn default_shiny_rate() -> f64 {
    DEFAULT_SHINY_RATE
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            max_id: DEFAULT_MAX_ID,
            shiny_rate: DEFAULT_SHINY_RATE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            concurrent_fetch: false,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`. [`Config::validate`] rejects unknown names; a config built
    /// in code without validation falls back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::from_toml(&content).map_err(|e| anyhow!("Invalid config file {}: {}", path, e))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        match fs::read_to_string(path).await {
            Ok(content) => {
                Self::from_toml(&content).map_err(|e| anyhow!("Invalid config file {}: {}", path, e))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(anyhow!("Failed to read config file {}: {}", path, e)),
        }
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| anyhow!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(anyhow!("api.base_url must not be empty"));
        }
        if self.api.timeout_seconds == 0 {
            return Err(anyhow!("api.timeout_seconds must be at least 1"));
        }
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(anyhow!(
                "logging.level must be one of off, error, warn, info, debug, trace; got '{}'",
                self.logging.level
            ));
        }
        if self.roll.max_id == 0 {
            return Err(anyhow!("roll.max_id must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.roll.shiny_rate) {
            return Err(anyhow!(
                "roll.shiny_rate must be between 0 and 1, got {}",
                self.roll.shiny_rate
            ));
        }
        if self.roll.history_capacity == 0 {
            return Err(anyhow!("roll.history_capacity must be at least 1"));
        }
        Ok(())
    }
}
