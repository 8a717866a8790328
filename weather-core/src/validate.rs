use crate::error::WeatherError;

/// Trim user input and reject it if nothing is left.
pub fn validate_location(raw: &str) -> Result<&str, WeatherError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WeatherError::Validation);
    }

    Ok(trimmed)
}
