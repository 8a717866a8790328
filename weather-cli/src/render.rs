//! Terminal layout for the search form and its results.

use weather_core::{Presentation, SearchState, WeatherReading};

pub const TITLE: &str = "WEATHER APP";
pub const DESCRIPTION: &str = "Search for the current weather condition in your city";
pub const PLACEHOLDER: &str = "Enter a city Name";

const TEMPERATURE_ICON: &str = "🌡️";
const CONDITION_ICON: &str = "☁️";
const LOCATION_ICON: &str = "📍";

pub fn header() -> String {
    format!("{TITLE}\n{DESCRIPTION}\n")
}

pub fn submit_label(loading: bool) -> &'static str {
    if loading { "loading...." } else { "search" }
}

/// Help line under the prompt, naming the idle submit action.
pub fn prompt_help() -> String {
    format!("Enter to {}, Esc to quit", submit_label(false))
}

pub fn error_banner(message: &str) -> String {
    format!("error: {message}\n")
}

pub fn rows(view: &Presentation) -> String {
    format!(
        "{TEMPERATURE_ICON}  {}\n{CONDITION_ICON}  {}\n{LOCATION_ICON}  {}\n",
        view.temperature, view.condition, view.location
    )
}

/// Error banner, result rows, or nothing, depending on the state.
pub fn outcome(state: &SearchState, present: impl Fn(&WeatherReading) -> Presentation) -> String {
    if let Some(message) = state.error() {
        return error_banner(message);
    }

    state.reading().map(|reading| rows(&present(reading))).unwrap_or_default()
}
