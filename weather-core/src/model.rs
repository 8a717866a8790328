use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one successful current-conditions lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub condition: String,
    pub location_name: String,
    pub unit: TemperatureUnit,
}

impl WeatherReading {
    pub fn celsius(
        temperature_c: f64,
        condition: impl Into<String>,
        location_name: impl Into<String>,
    ) -> Self {
        Self {
            temperature_c,
            condition: condition.into(),
            location_name: location_name.into(),
            unit: TemperatureUnit::Celsius,
        }
    }
}

/// Unit attached to a reading. Only Celsius is produced today; `Other`
/// carries whatever label was supplied so it can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemperatureUnit {
    Celsius,
    Other(String),
}

impl TemperatureUnit {
    /// `"C"` and `"c"` both mean Celsius.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("c") {
            TemperatureUnit::Celsius
        } else {
            TemperatureUnit::Other(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Other(label) => label,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TemperatureUnit {
    fn from(value: String) -> Self {
        TemperatureUnit::parse(&value)
    }
}

impl From<TemperatureUnit> for String {
    fn from(unit: TemperatureUnit) -> Self {
        unit.as_str().to_string()
    }
}
