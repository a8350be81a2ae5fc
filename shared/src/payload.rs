//! OpenWeatherMap response shapes
//!
//! Only the fields the planner consumes are modelled; everything else in the
//! upstream JSON is ignored. Structural checks live in [`crate::validation`].

use serde::{Deserialize, Serialize};

/// `GET /weather` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OWMCurrentResponse {
    pub main: OWMMain,
    pub weather: Vec<OWMWeather>,
    #[serde(default)]
    pub dt: Option<i64>,
    #[serde(default)]
    pub timezone: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OWMMain {
    pub temp: f64,
    pub humidity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OWMWeather {
    pub main: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `GET /forecast` response (5 days at 3-hour resolution)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OWMForecastResponse {
    pub list: Vec<OWMForecastItem>,
    #[serde(default)]
    pub city: Option<OWMCity>,
}

impl OWMForecastResponse {
    /// Offset of the forecast location from UTC, in seconds
    pub fn timezone_offset_seconds(&self) -> i32 {
        self.city.as_ref().and_then(|c| c.timezone).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OWMForecastItem {
    /// Unix timestamp, UTC
    pub dt: i64,
    pub main: OWMMain,
    pub weather: Vec<OWMWeather>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OWMCity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// One candidate in a `GET /reverse` geocoding response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OWMGeocodeCandidate {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}
