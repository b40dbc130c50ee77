//! Shared HTTP client construction

use crate::config::HourcastConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Build the HTTP client both pipeline stages share. Cloning a
/// [`reqwest::Client`] reuses the same connection pool.
pub(crate) fn build_client(config: &HourcastConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_seconds.into()))
        .user_agent(config.http.user_agent.clone())
        .build()
        .with_context(|| "Failed to create HTTP client")
}
