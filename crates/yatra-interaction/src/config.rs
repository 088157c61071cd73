//! RapidAPI configuration.

use std::env;
use yatra_core::error::{Result, YatraError};

/// Shared credentials for the RapidAPI-hosted search services.
///
/// Both the rail and the flight client authenticate with the same key; the
/// per-service host header is set by each client.
#[derive(Debug, Clone)]
pub struct RapidApiConfig {
    api_key: String,
}

impl RapidApiConfig {
    /// Creates a configuration from an explicit key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Loads the configuration from the `RAPIDAPI_KEY` environment variable.
    pub fn try_from_env() -> Result<Self> {
        let api_key = env::var("RAPIDAPI_KEY")
            .map_err(|_| YatraError::config("RAPIDAPI_KEY not found in environment variables"))?;
        if api_key.trim().is_empty() {
            return Err(YatraError::config("RAPIDAPI_KEY is empty"));
        }
        Ok(Self::new(api_key))
    }

    /// The API key to send in the `x-rapidapi-key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}
