//! Common types used across the platform

use serde::{Deserialize, Serialize};
use validator::Validate;

/// GPS coordinates, as reported by the device's geolocation API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
pub struct GpsCoordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "hi", alias = "hindi")]
    Hindi,
}

/// Three-step ordinal scale used for water requirement and yield potential
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Low => write!(f, "Low"),
            Tier::Medium => write!(f, "Medium"),
            Tier::High => write!(f, "High"),
        }
    }
}

/// Inclusive temperature range in degrees Celsius
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemperatureRange {
    pub min_celsius: i32,
    pub max_celsius: i32,
}

impl TemperatureRange {
    pub const fn new(min_celsius: i32, max_celsius: i32) -> Self {
        Self {
            min_celsius,
            max_celsius,
        }
    }
}
