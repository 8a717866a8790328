//! Human-readable messages derived from a [`WeatherReading`].
//!
//! Everything here is pure except [`location_message`] and
//! [`Presentation::of`], which read the local wall clock at call time. Two
//! renders of the same reading can therefore disagree on day or night.

use chrono::{Local, Timelike};

use crate::{TemperatureUnit, WeatherReading};

/// Message for a temperature. Each bracket includes its lower bound.
pub fn temperature_message(temperature: f64, unit: &TemperatureUnit) -> String {
    // Avoid printing "-0°C".
    let t = temperature + 0.0;

    match unit {
        TemperatureUnit::Celsius => {
            if t < 0.0 {
                format!("It's freezing at {t}°C! Bundle Up!")
            } else if t < 10.0 {
                format!("It's quite cold at {t}°C! wear warm clothes.")
            } else if t < 20.0 {
                format!("The temperature is {t}°C! comfortable for a light jacket.")
            } else if t < 30.0 {
                format!("It's a pleasant {t}°C! enjoy the nice weather!")
            } else {
                format!("It's hot at {t}°C. stay hydrated")
            }
        }
        // Placeholder until other units are supported.
        TemperatureUnit::Other(label) => format!("{t} ° {label}"),
    }
}

/// Message for a provider condition text. Unknown conditions are returned as-is.
///
/// The "thunderstrom" key is misspelled, so a real "Thunderstorm" condition
/// falls through unchanged.
pub fn condition_message(condition: &str) -> String {
    let message = match condition.to_lowercase().as_str() {
        "sunny" => "It's a beautiful sunny day!",
        "partly cloudy" => "Expect some clouds and sunshine",
        "overcast" => "The sky is overcast",
        "rain" => "Dont forget your umbrella.",
        "thunderstrom" => "Thunderstrom is expected today",
        "snow" => "Bundle up! its snowing.",
        "mist" => "It's misty outside.",
        "fog" => "Be careful, there is fog outside",
        _ => return condition.to_string(),
    };

    message.to_string()
}

pub fn is_night(hour: u32) -> bool {
    hour >= 18 || hour < 6
}

pub fn location_message_at(location: &str, hour: u32) -> String {
    let when = if is_night(hour) { "at Night" } else { "During the Day" };
    format!("{location} {when}")
}

/// Like [`location_message_at`], using the current local hour.
pub fn location_message(location: &str) -> String {
    location_message_at(location, Local::now().hour())
}

/// The three display lines for one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub temperature: String,
    pub condition: String,
    pub location: String,
}

impl Presentation {
    pub fn of(reading: &WeatherReading) -> Self {
        Self::at_hour(reading, Local::now().hour())
    }

    pub fn at_hour(reading: &WeatherReading, hour: u32) -> Self {
        Self {
            temperature: temperature_message(reading.temperature_c, &reading.unit),
            condition: condition_message(&reading.condition),
            location: location_message_at(&reading.location_name, hour),
        }
    }
}
