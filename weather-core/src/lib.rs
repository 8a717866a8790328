//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weatherapi.com fetcher behind the [`WeatherProvider`] trait
//! - Input validation and the search state container
//! - Display messages derived from a reading
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod model;
pub mod present;
pub mod provider;
pub mod session;
pub mod validate;

pub use config::Config;
pub use error::{FetchFailure, WeatherError};
pub use model::{TemperatureUnit, WeatherReading};
pub use present::Presentation;
pub use provider::{WeatherProvider, provider_from_config};
pub use session::{SearchState, SearchStatus, SearchTicket};
pub use validate::validate_location;
