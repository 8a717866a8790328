use crate::{Config, FetchFailure, WeatherReading, provider::weatherapi::WeatherApiClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current weather conditions for a free-text location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, location: &str) -> Result<WeatherReading, FetchFailure>;
}

/// Construct the weatherapi.com provider from resolved configuration.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    if !config.is_api_key_configured() {
        tracing::warn!("no API key configured; requests will be rejected by the provider");
    }

    Box::new(
        WeatherApiClient::new(config.api_key().to_owned()).with_base_url(config.base_url()),
    )
}
