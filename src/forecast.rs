//! Forecast stage: fetch the hourly temperature series for coordinates
//!
//! Requests hourly 2-metre temperatures in Fahrenheit over the service's
//! default horizon and keeps the first twelve samples. A single failed
//! attempt surfaces immediately; retry is a manual user action.

use crate::client;
use crate::config::HourcastConfig;
use crate::error::LookupError;
use crate::models::{Coordinates, HourlyForecast, open_meteo};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Fetches hourly temperature forecasts from the weather service.
#[derive(Debug, Clone)]
pub struct ForecastFetcher {
    client: Client,
    base_url: String,
}

impl ForecastFetcher {
    /// Create a fetcher with its own HTTP client
    pub fn new(config: &HourcastConfig) -> anyhow::Result<Self> {
        let client = client::build_client(config)?;
        Ok(Self::with_client(
            client,
            config.services.forecast_base_url.clone(),
        ))
    }

    /// Create a fetcher sharing an existing HTTP client
    #[must_use]
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch the hourly forecast for fully resolved coordinates.
    ///
    /// Only ever called after a successful resolution; the pipeline never
    /// reaches this stage with placeholder coordinates.
    #[instrument(skip(self), fields(lat = coords.latitude, lon = coords.longitude))]
    pub async fn fetch_hourly(&self, coords: Coordinates) -> crate::Result<HourlyForecast> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&hourly=temperature_2m&temperature_unit=fahrenheit",
            self.base_url, coords.latitude, coords.longitude
        );
        debug!("forecast request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::fetch(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::fetch(format!(
                "weather service returned {status}"
            )));
        }

        let body: open_meteo::ForecastResponse = response
            .json()
            .await
            .map_err(|e| LookupError::fetch(format!("failed to parse forecast response: {e}")))?;

        let Some(hourly) = body.hourly else {
            return Err(LookupError::fetch("forecast response has no hourly data"));
        };

        let forecast = HourlyForecast::from_open_meteo(hourly);
        info!(
            "fetched {} hourly samples for ({:.4}, {:.4})",
            forecast.len(),
            coords.latitude,
            coords.longitude
        );

        Ok(forecast)
    }
}
