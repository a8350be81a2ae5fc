//! Validation utilities for the Crop Planner
//!
//! Upstream payloads are checked here before normalization so that shape
//! mismatches surface as errors instead of nonsense readings.

use validator::Validate;

use crate::error::{PayloadError, WeatherErrorKind};
use crate::payload::{OWMCurrentResponse, OWMForecastResponse, OWMMain, OWMWeather};
use crate::types::GpsCoordinates;

// ============================================================================
// Input Validations
// ============================================================================

/// Trim a free-text location query, rejecting blank input
pub fn validate_location_query(query: &str) -> Result<&str, WeatherErrorKind> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(WeatherErrorKind::EmptyLocation);
    }
    Ok(trimmed)
}

/// Validate device coordinates before reverse geocoding
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    if !coordinates.latitude.is_finite() || !coordinates.longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    coordinates
        .validate()
        .map_err(|_| "Latitude must be within ±90 and longitude within ±180")
}

/// Validate a percentage is in 0-100
pub fn validate_percentage(value: i64) -> Result<(), &'static str> {
    if !(0..=100).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

// ============================================================================
// Payload Validations
// ============================================================================

/// Check a current-conditions payload carries a usable reading
pub fn validate_current_payload(payload: &OWMCurrentResponse) -> Result<(), PayloadError> {
    validate_reading(&payload.main, &payload.weather)
}

/// Check every entry of a forecast payload carries a usable reading
pub fn validate_forecast_payload(payload: &OWMForecastResponse) -> Result<(), PayloadError> {
    for (index, item) in payload.list.iter().enumerate() {
        validate_reading(&item.main, &item.weather).map_err(|e| {
            PayloadError::InvalidForecastEntry {
                index,
                source: Box::new(e),
            }
        })?;
    }
    Ok(())
}

fn validate_reading(main: &OWMMain, weather: &[OWMWeather]) -> Result<(), PayloadError> {
    if !main.temp.is_finite() {
        return Err(PayloadError::NonFiniteTemperature(main.temp));
    }
    if validate_percentage(main.humidity).is_err() {
        return Err(PayloadError::HumidityOutOfRange(main.humidity));
    }
    if weather.is_empty() {
        return Err(PayloadError::MissingCondition);
    }
    Ok(())
}
