//! `hourcast` - city-to-hourly-forecast resolution core
//!
//! This library resolves a free-text city name to coordinates via a
//! geocoding service, fetches the hourly temperature forecast for those
//! coordinates, and returns the next twelve (time, temperature) samples.
//! Rendering and UI state wiring belong to the presentation layer, which
//! drives the pipeline through [`WeatherState`] tickets.

pub mod config;
pub mod error;
pub mod forecast;
pub mod format;
pub mod geocode;
pub mod models;
pub mod pipeline;
pub mod state;

mod client;

// Re-export core types for public API
pub use config::HourcastConfig;
pub use error::{LookupError, LookupStage};
pub use forecast::ForecastFetcher;
pub use format::{format_temperature, format_time};
pub use geocode::Geocoder;
pub use models::{Coordinates, FORECAST_HOURS, HourlyForecast, HourlySample};
pub use pipeline::ForecastPipeline;
pub use state::{LookupTicket, WeatherState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, LookupError>;
