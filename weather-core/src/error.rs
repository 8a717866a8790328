use reqwest::StatusCode;
use thiserror::Error;

/// User-facing failure of a single search.
///
/// The `Display` text of each variant is exactly what the front end shows;
/// the underlying cause of a fetch failure is reachable through
/// [`std::error::Error::source`] for logging only.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("please enter a valid location.")]
    Validation,

    #[error("city not found. please try again.")]
    Fetch(#[from] FetchFailure),
}

impl WeatherError {
    pub fn is_validation(&self) -> bool {
        matches!(self, WeatherError::Validation)
    }
}

/// Why a request to the weather provider did not produce a reading.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request could not be sent")]
    Transport(#[source] reqwest::Error),

    #[error("response body could not be read")]
    Body(#[source] reqwest::Error),

    #[error("provider answered with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response body did not match the expected shape")]
    Decode(#[from] serde_json::Error),
}
