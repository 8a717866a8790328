//! State of the search form: input text, last reading or error, loading flag.
//!
//! Every submission advances a generation counter. A fetch outcome is only
//! applied if it carries the current generation, so a slow response from an
//! earlier submission can never overwrite the result of a later one.

use std::error::Error as _;

use crate::{WeatherError, WeatherProvider, WeatherReading, validate::validate_location};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Handle for one outstanding fetch, returned by [`SearchState::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    location: String,
}

impl SearchTicket {
    pub fn location(&self) -> &str {
        &self.location
    }
}

#[derive(Debug, Default)]
pub struct SearchState {
    input: String,
    reading: Option<WeatherReading>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.reading.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> SearchStatus {
        if self.loading {
            SearchStatus::Loading
        } else if self.error.is_some() {
            SearchStatus::Error
        } else if self.reading.is_some() {
            SearchStatus::Success
        } else {
            SearchStatus::Idle
        }
    }

    /// Validate the current input and start a new search.
    ///
    /// Returns `None` when the input is blank; the validation message is then
    /// shown and no request must be made.
    pub fn begin(&mut self) -> Option<SearchTicket> {
        self.generation += 1;

        let location = match validate_location(&self.input) {
            Ok(location) => location.to_string(),
            Err(err) => {
                tracing::debug!("rejected blank location");
                self.reading = None;
                self.error = Some(err.to_string());
                self.loading = false;
                return None;
            }
        };

        self.loading = true;
        self.error = None;

        Some(SearchTicket { generation: self.generation, location })
    }

    /// Apply the outcome of a fetch. Returns `false` if the ticket is stale
    /// and the outcome was discarded.
    pub fn finish(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<WeatherReading, WeatherError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                location = %ticket.location,
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded search result"
            );
            return false;
        }

        match outcome {
            Ok(reading) => {
                tracing::debug!(location = %ticket.location, "search succeeded");
                self.reading = Some(reading);
                self.error = None;
            }
            Err(err) => {
                match err.source() {
                    Some(cause) => tracing::error!(
                        location = %ticket.location,
                        error = %cause,
                        "error fetching weather data"
                    ),
                    None => tracing::error!(location = %ticket.location, "error fetching weather data"),
                }
                self.reading = None;
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;

        true
    }

    /// Run one full search against `provider` using the current input.
    pub async fn submit(&mut self, provider: &dyn WeatherProvider) -> SearchStatus {
        let Some(ticket) = self.begin() else {
            return self.status();
        };

        let outcome =
            provider.current_weather(ticket.location()).await.map_err(WeatherError::from);
        self.finish(ticket, outcome);

        self.status()
    }
}
