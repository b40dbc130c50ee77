//! Geocoding stage: resolve a free-text city name to coordinates
//!
//! Uses the Open-Meteo geocoding API (no API key required). Every call is a
//! fresh lookup; results are never cached across calls.

use crate::client;
use crate::config::HourcastConfig;
use crate::error::LookupError;
use crate::models::{Coordinates, open_meteo};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Resolves city names against the geocoding service, requesting exactly one
/// candidate per lookup.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    /// Create a geocoder with its own HTTP client
    pub fn new(config: &HourcastConfig) -> anyhow::Result<Self> {
        let client = client::build_client(config)?;
        Ok(Self::with_client(
            client,
            config.services.geocoding_base_url.clone(),
        ))
    }

    /// Create a geocoder sharing an existing HTTP client
    #[must_use]
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Resolve a city name to its single best-match coordinates.
    ///
    /// Returns [`LookupError::NoMatch`] when the service knows no such place,
    /// which is an expected outcome and must not abort the caller's session.
    #[instrument(skip(self))]
    pub async fn resolve(&self, city: &str) -> crate::Result<Coordinates> {
        let city = city.trim();
        if city.is_empty() {
            return Err(LookupError::validation("city name is empty"));
        }

        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(city)
        );
        debug!("geocoding request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::resolution(city, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::resolution(
                city,
                format!("geocoding service returned {status}"),
            ));
        }

        let body: open_meteo::GeocodingResponse = response.json().await.map_err(|e| {
            LookupError::resolution(city, format!("failed to parse geocoding response: {e}"))
        })?;

        let Some(candidate) = body.results.unwrap_or_default().into_iter().next() else {
            debug!("no geocoding match for '{}'", city);
            return Err(LookupError::NoMatch {
                city: city.to_string(),
            });
        };

        let region = candidate
            .admin1
            .as_deref()
            .or(candidate.country.as_deref())
            .unwrap_or("unknown region");
        info!(
            "resolved '{}' to {}, {} ({:.4}, {:.4})",
            city, candidate.name, region, candidate.latitude, candidate.longitude
        );

        Ok(candidate.into())
    }
}
