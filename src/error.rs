//! Error types for the city-to-forecast lookup pipeline

use thiserror::Error;

/// Which pipeline stage a failure belongs to, so callers can present
/// "unknown city" and "forecast unavailable" as distinct messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    /// City-name-to-coordinates resolution (geocoding)
    Resolution,
    /// Hourly forecast retrieval
    Fetch,
}

/// Main error type for a city forecast lookup
#[derive(Error, Debug)]
pub enum LookupError {
    /// The geocoding service returned no candidate for the city name.
    /// An expected outcome (typos, non-existent places), not a fault.
    #[error("no geocoding match for '{city}'")]
    NoMatch { city: String },

    /// The geocoding request itself failed (transport, HTTP status,
    /// malformed body)
    #[error("geocoding failed for '{city}': {message}")]
    Resolution { city: String, message: String },

    /// The weather request failed or returned a malformed body
    #[error("forecast request failed: {message}")]
    Fetch { message: String },

    /// Input rejected before any network activity
    #[error("invalid input: {message}")]
    Validation { message: String },
}

impl LookupError {
    /// Create a new resolution error
    pub fn resolution<S: Into<String>, M: ToString>(city: S, message: M) -> Self {
        Self::Resolution {
            city: city.into(),
            message: message.to_string(),
        }
    }

    /// Create a new fetch error
    pub fn fetch<M: ToString>(message: M) -> Self {
        Self::Fetch {
            message: message.to_string(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The pipeline stage this error is tagged with
    #[must_use]
    pub fn stage(&self) -> LookupStage {
        match self {
            LookupError::NoMatch { .. }
            | LookupError::Resolution { .. }
            | LookupError::Validation { .. } => LookupStage::Resolution,
            LookupError::Fetch { .. } => LookupStage::Fetch,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LookupError::NoMatch { city } => {
                format!("No place named '{city}' was found. Check the spelling and try again.")
            }
            LookupError::Resolution { city, .. } => {
                format!("Could not look up '{city}'. Please check your internet connection.")
            }
            LookupError::Fetch { .. } => {
                "The forecast is currently unavailable. Re-select the city to retry.".to_string()
            }
            LookupError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}
