//! Error types shared by the server and the WASM front-end

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Language;

/// Why a weather or location lookup produced no data
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherErrorKind {
    #[error("No location entered")]
    EmptyLocation,

    #[error("Location did not resolve to a known place")]
    InvalidLocation,

    #[error("Weather service unavailable")]
    WeatherUnavailable,

    #[error("No place found for the given coordinates")]
    LocationNotFound,
}

impl WeatherErrorKind {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            WeatherErrorKind::EmptyLocation => "EMPTY_LOCATION",
            WeatherErrorKind::InvalidLocation => "INVALID_LOCATION",
            WeatherErrorKind::WeatherUnavailable => "WEATHER_UNAVAILABLE",
            WeatherErrorKind::LocationNotFound => "LOCATION_NOT_FOUND",
        }
    }

    /// Key into the front-end's translation table
    pub fn message_key(&self) -> &'static str {
        match self {
            WeatherErrorKind::EmptyLocation => "enterLocation",
            WeatherErrorKind::InvalidLocation => "invalidLocation",
            WeatherErrorKind::WeatherUnavailable => "weatherError",
            WeatherErrorKind::LocationNotFound => "locationError",
        }
    }

    /// User-facing message in the requested language
    pub fn message(&self, language: Language) -> &'static str {
        match (self, language) {
            (WeatherErrorKind::EmptyLocation, Language::English) => {
                "Please enter a location first"
            }
            (WeatherErrorKind::EmptyLocation, Language::Hindi) => "कृपया पहले स्थान दर्ज करें",
            (WeatherErrorKind::InvalidLocation, Language::English) => {
                "Location not found. Please check the city name."
            }
            (WeatherErrorKind::InvalidLocation, Language::Hindi) => {
                "स्थान नहीं मिला। कृपया शहर का नाम जांचें।"
            }
            (WeatherErrorKind::WeatherUnavailable, Language::English) => {
                "Unable to fetch weather data. Please try again later."
            }
            (WeatherErrorKind::WeatherUnavailable, Language::Hindi) => {
                "मौसम की जानकारी प्राप्त नहीं हो सकी। कृपया बाद में पुनः प्रयास करें।"
            }
            (WeatherErrorKind::LocationNotFound, Language::English) => {
                "Could not detect your location. Please enter it manually."
            }
            (WeatherErrorKind::LocationNotFound, Language::Hindi) => {
                "आपका स्थान पता नहीं चल सका। कृपया इसे स्वयं दर्ज करें।"
            }
        }
    }
}

/// A soil label that is not one of the four known categories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown soil category: {0}")]
pub struct ParseSoilError(pub String);

/// Structural problems in an upstream weather payload
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    #[error("Payload has no weather condition entry")]
    MissingCondition,

    #[error("Temperature is not a finite number: {0}")]
    NonFiniteTemperature(f64),

    #[error("Humidity out of range: {0}")]
    HumidityOutOfRange(i64),

    #[error("Forecast entry {index} is invalid: {source}")]
    InvalidForecastEntry {
        index: usize,
        #[source]
        source: Box<PayloadError>,
    },
}
