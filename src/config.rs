//! Configuration for the forecast lookup pipeline
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, with defaults pointing at the public Open-Meteo endpoints.

use crate::LookupError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HourcastConfig {
    /// External service endpoints
    #[serde(default)]
    pub services: ServicesConfig,
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

/// External service endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the geocoding service (no API key required)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL of the weather forecast service
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    concat!("hourcast/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl HourcastConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from a specific path, falling back to defaults for
    /// anything not set there or in `HOURCAST_`-prefixed environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("HOURCAST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: HourcastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Default configuration file path
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hourcast").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("Geocoding", &self.services.geocoding_base_url),
            ("Forecast", &self.services.forecast_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(LookupError::validation(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if self.http.timeout_seconds == 0 {
            return Err(LookupError::validation("HTTP timeout cannot be zero").into());
        }
        if self.http.timeout_seconds > 300 {
            return Err(
                LookupError::validation("HTTP timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }
}
