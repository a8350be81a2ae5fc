//! Weather data models

use serde::{Deserialize, Serialize};

/// Simplified sky/precipitation state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionCategory::Sunny => write!(f, "Sunny"),
            ConditionCategory::Cloudy => write!(f, "Cloudy"),
            ConditionCategory::Rainy => write!(f, "Rainy"),
            ConditionCategory::Stormy => write!(f, "Stormy"),
        }
    }
}

/// A single normalized weather reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherPoint {
    /// Short date label, e.g. "Oct 18"
    pub date: String,
    pub temperature_celsius: i32,
    pub humidity_percent: u8,
    /// Heuristic, see [`crate::normalize::estimate_rain_chance`]
    pub rain_chance_percent: u8,
    pub condition: ConditionCategory,
}

/// Current conditions followed by up to five daily forecast points
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "Vec<WeatherPoint>", try_from = "Vec<WeatherPoint>")]
pub struct WeatherSeries {
    points: Vec<WeatherPoint>,
}

impl WeatherSeries {
    pub const MAX_FORECAST_POINTS: usize = 5;
    pub const MAX_LEN: usize = Self::MAX_FORECAST_POINTS + 1;

    /// Prepend current conditions to the forecast, dropping forecast points
    /// beyond the fifth
    pub fn new(current: WeatherPoint, forecast: Vec<WeatherPoint>) -> Self {
        let mut points = Vec::with_capacity(Self::MAX_LEN);
        points.push(current);
        points.extend(forecast.into_iter().take(Self::MAX_FORECAST_POINTS));
        Self { points }
    }

    pub fn current(&self) -> &WeatherPoint {
        &self.points[0]
    }

    pub fn forecast(&self) -> &[WeatherPoint] {
        &self.points[1..]
    }

    pub fn points(&self) -> &[WeatherPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a series carries at least the current reading
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<WeatherSeries> for Vec<WeatherPoint> {
    fn from(series: WeatherSeries) -> Self {
        series.points
    }
}

impl TryFrom<Vec<WeatherPoint>> for WeatherSeries {
    type Error = String;

    fn try_from(mut points: Vec<WeatherPoint>) -> Result<Self, Self::Error> {
        if points.is_empty() {
            return Err("weather series requires current conditions".to_string());
        }
        if points.len() > Self::MAX_LEN {
            return Err(format!(
                "weather series holds at most {} points, got {}",
                Self::MAX_LEN,
                points.len()
            ));
        }
        let current = points.remove(0);
        Ok(Self::new(current, points))
    }
}

/// Static baseline reading used to bias recommendation text
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReferenceWeatherSample {
    pub label: &'static str,
    pub temperature_celsius: i32,
    pub humidity_percent: u8,
    pub rain_chance_percent: u8,
    pub condition: ConditionCategory,
}
