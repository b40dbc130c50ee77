//! Two-stage lookup pipeline: resolve, then fetch
//!
//! The stages are strictly sequential and dependent. The fetch stage runs
//! only after a successful resolution, so "unknown city" and "forecast
//! unavailable" stay distinguishable and the weather service is never hit
//! with unresolved coordinates.

use crate::client;
use crate::config::HourcastConfig;
use crate::forecast::ForecastFetcher;
use crate::geocode::Geocoder;
use crate::models::HourlyForecast;
use tracing::{instrument, warn};

/// The resolve-then-fetch pipeline, invoked once per city lookup.
#[derive(Debug, Clone)]
pub struct ForecastPipeline {
    geocoder: Geocoder,
    fetcher: ForecastFetcher,
}

impl ForecastPipeline {
    /// Build a pipeline whose stages share one HTTP client
    pub fn new(config: &HourcastConfig) -> anyhow::Result<Self> {
        let client = client::build_client(config)?;
        Ok(Self {
            geocoder: Geocoder::with_client(
                client.clone(),
                config.services.geocoding_base_url.clone(),
            ),
            fetcher: ForecastFetcher::with_client(
                client,
                config.services.forecast_base_url.clone(),
            ),
        })
    }

    /// Assemble a pipeline from already-constructed stages
    #[must_use]
    pub fn from_stages(geocoder: Geocoder, fetcher: ForecastFetcher) -> Self {
        Self { geocoder, fetcher }
    }

    /// Look up the hourly forecast for a city name.
    ///
    /// The returned error is stage-tagged (see [`crate::LookupStage`]); both
    /// outcomes are recoverable and leave the session usable.
    #[instrument(skip(self))]
    pub async fn lookup_forecast(&self, city: &str) -> crate::Result<HourlyForecast> {
        let coords = self.geocoder.resolve(city).await.inspect_err(|e| {
            warn!("resolution failed for '{}': {}", city, e);
        })?;

        self.fetcher.fetch_hourly(coords).await.inspect_err(|e| {
            warn!("forecast fetch failed for '{}': {}", city, e);
        })
    }
}
