//! Domain types for the lookup pipeline, plus the Open-Meteo wire formats

use serde::{Deserialize, Serialize};

use crate::format;

/// Number of hourly samples a forecast is truncated to
pub const FORECAST_HOURS: usize = 12;

/// A resolved latitude/longitude pair. Exists transiently between the
/// geocoding and fetch stages; never cached or persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One (timestamp, temperature) pair of an hourly forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    /// ISO-8601-like local datetime string, e.g. `2024-03-01T13:00`
    pub time: String,
    /// Temperature in degrees Fahrenheit
    pub temperature_f: f64,
}

impl HourlySample {
    /// 12-hour clock display string for this sample's timestamp
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format::format_time(&self.time)
    }

    /// Integer-rounded temperature for table display
    #[must_use]
    pub fn formatted_temperature(&self) -> String {
        format::format_temperature(self.temperature_f)
    }
}

/// Chronologically ascending hourly samples, at most [`FORECAST_HOURS`] of them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlyForecast {
    samples: Vec<HourlySample>,
}

impl HourlyForecast {
    pub(crate) fn from_open_meteo(hourly: open_meteo::HourlyData) -> Self {
        // Pair time[i] with temperature_2m[i]; a length mismatch between the
        // two arrays truncates to the shorter one.
        let samples = hourly
            .time
            .into_iter()
            .zip(hourly.temperature)
            .take(FORECAST_HOURS)
            .map(|(time, temperature_f)| HourlySample {
                time,
                temperature_f,
            })
            .collect();
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[HourlySample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Open-Meteo API response structures
pub(crate) mod open_meteo {
    use serde::Deserialize;

    use super::Coordinates;

    /// Geocoding response; `results` is absent when nothing matched
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        pub admin1: Option<String>,
    }

    impl From<GeocodingResult> for Coordinates {
        fn from(result: GeocodingResult) -> Self {
            Self {
                latitude: result.latitude,
                longitude: result.longitude,
            }
        }
    }

    /// Forecast response; `hourly` is absent on a malformed or partial reply
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub hourly: Option<HourlyData>,
    }

    /// Hourly forecast arrays, index-aligned
    #[derive(Debug, Deserialize)]
    pub struct HourlyData {
        pub time: Vec<String>,
        #[serde(rename = "temperature_2m")]
        pub temperature: Vec<f64>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(n: usize) -> open_meteo::HourlyData {
        open_meteo::HourlyData {
            time: (0..n).map(|i| format!("2024-03-01T{i:02}:00")).collect(),
            temperature: (0..n).map(|i| 50.0 + i as f64).collect(),
        }
    }

    #[test]
    fn test_truncates_to_twelve_samples() {
        let forecast = HourlyForecast::from_open_meteo(hourly(24));
        assert_eq!(forecast.len(), FORECAST_HOURS);
        assert_eq!(forecast.samples()[0].time, "2024-03-01T00:00");
        assert_eq!(forecast.samples()[11].time, "2024-03-01T11:00");
        assert_eq!(forecast.samples()[11].temperature_f, 61.0);
    }

    #[test]
    fn test_short_series_is_not_padded() {
        let forecast = HourlyForecast::from_open_meteo(hourly(5));
        assert_eq!(forecast.len(), 5);
    }

    #[test]
    fn test_mismatched_arrays_pair_positionally() {
        let data = open_meteo::HourlyData {
            time: vec!["2024-03-01T00:00".into(), "2024-03-01T01:00".into()],
            temperature: vec![70.0],
        };
        let forecast = HourlyForecast::from_open_meteo(data);
        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast.samples()[0].temperature_f, 70.0);
    }

    #[test]
    fn test_geocoding_response_deserializes() {
        let body = r#"{"results":[{"name":"Austin","latitude":30.27,"longitude":-97.74,"country":"United States","admin1":"Texas"}]}"#;
        let parsed: open_meteo::GeocodingResponse = serde_json::from_str(body).unwrap();
        let first = parsed.results.unwrap().into_iter().next().unwrap();
        assert_eq!(first.name, "Austin");
        let coords = Coordinates::from(first);
        assert_eq!(coords.latitude, 30.27);
        assert_eq!(coords.longitude, -97.74);
    }

    #[test]
    fn test_empty_geocoding_response_deserializes() {
        let parsed: open_meteo::GeocodingResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_none());
    }

    #[test]
    fn test_forecast_response_without_hourly_field() {
        let parsed: open_meteo::ForecastResponse =
            serde_json::from_str(r#"{"latitude":30.27,"longitude":-97.74}"#).unwrap();
        assert!(parsed.hourly.is_none());
    }
}
