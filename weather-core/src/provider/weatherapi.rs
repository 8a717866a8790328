use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;

use crate::{FetchFailure, WeatherReading, config::DEFAULT_BASE_URL};

use super::WeatherProvider;

/// Client for the weatherapi.com `current.json` endpoint.
///
/// No request timeout is configured; a call waits until the transport
/// either answers or errors.
#[derive(Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn current_url(&self) -> String {
        format!("{}/current.json", self.base_url)
    }

    async fn fetch_current(&self, location: &str) -> Result<WeatherReading, FetchFailure> {
        let url = self.current_url();
        tracing::debug!(%url, location, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(FetchFailure::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchFailure::Body)?;

        if !status.is_success() {
            tracing::warn!(%status, location, "weatherapi rejected current request");
            return Err(FetchFailure::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;

        Ok(WeatherReading::celsius(
            parsed.current.temp_c,
            parsed.current.condition.text,
            parsed.location.name,
        ))
    }
}

impl fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<empty>" } else { "<redacted>" })
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current_weather(&self, location: &str) -> Result<WeatherReading, FetchFailure> {
        self.fetch_current(location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
