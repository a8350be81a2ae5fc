//! Conversion of OpenWeatherMap payloads into [`WeatherPoint`]s
//!
//! Every function here is total: a payload that slipped past validation still
//! maps to something sensible instead of panicking.

use std::ops::RangeInclusive;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Timelike, Utc};

use crate::models::{ConditionCategory, Location, WeatherPoint, WeatherSeries};
use crate::payload::{
    OWMCurrentResponse, OWMForecastItem, OWMForecastResponse, OWMGeocodeCandidate, OWMMain,
    OWMWeather,
};

/// Keyword rules, checked in order; the first hit wins
const CONDITION_RULES: &[(&[&str], ConditionCategory)] = &[
    (&["clear"], ConditionCategory::Sunny),
    (&["cloud"], ConditionCategory::Cloudy),
    (&["rain", "drizzle"], ConditionCategory::Rainy),
    (&["thunder", "storm"], ConditionCategory::Stormy),
];

/// Local hours from which the daily representative sample is taken
pub const MIDDAY_HOURS: RangeInclusive<u32> = 11..=13;

pub const RAIN_LIKELY_PERCENT: u8 = 70;
pub const RAIN_UNLIKELY_PERCENT: u8 = 20;

/// Map a verbose upstream condition label onto one of four categories.
/// Unknown labels fall back to [`ConditionCategory::Cloudy`].
pub fn map_condition(label: &str) -> ConditionCategory {
    let condition = label.to_lowercase();
    CONDITION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(ConditionCategory::Cloudy)
}

/// Crude placeholder for precipitation likelihood: 70 when the label
/// mentions rain, 20 otherwise. Not a forecasting model.
pub fn estimate_rain_chance(label: &str) -> u8 {
    if label.to_lowercase().contains("rain") {
        RAIN_LIKELY_PERCENT
    } else {
        RAIN_UNLIKELY_PERCENT
    }
}

/// Short date label, e.g. "Oct 18"
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Calendar date at a location `offset_seconds` east of UTC
pub fn local_date(now: DateTime<Utc>, offset_seconds: i32) -> NaiveDate {
    now.with_timezone(&fixed_offset(offset_seconds)).date_naive()
}

/// Pick one midday sample per day from a 3-hourly forecast and normalize
/// the first five of them
pub fn normalize_forecast_series(payload: &OWMForecastResponse) -> Vec<WeatherPoint> {
    let offset = fixed_offset(payload.timezone_offset_seconds());

    payload
        .list
        .iter()
        .filter_map(|item| {
            let local = DateTime::from_timestamp(item.dt, 0)?.with_timezone(&offset);
            MIDDAY_HOURS
                .contains(&local.hour())
                .then(|| forecast_point(item, local.date_naive()))
        })
        .take(WeatherSeries::MAX_FORECAST_POINTS)
        .collect()
}

/// Current conditions, labelled with the caller's notion of today
pub fn current_point(payload: &OWMCurrentResponse, today: NaiveDate) -> WeatherPoint {
    to_point(&payload.main, &payload.weather, today)
}

/// First geocoding candidate, if any
pub fn location_from_candidates(candidates: &[OWMGeocodeCandidate]) -> Option<Location> {
    candidates.first().map(|c| Location {
        name: c.name.clone(),
        latitude: c.lat,
        longitude: c.lon,
        country: c.country.clone(),
        state: c.state.clone(),
    })
}

fn forecast_point(item: &OWMForecastItem, date: NaiveDate) -> WeatherPoint {
    to_point(&item.main, &item.weather, date)
}

fn to_point(main: &OWMMain, weather: &[OWMWeather], date: NaiveDate) -> WeatherPoint {
    let label = weather.first().map(|w| w.main.as_str()).unwrap_or_default();

    WeatherPoint {
        date: format_date_label(date),
        temperature_celsius: main.temp.round() as i32,
        humidity_percent: main.humidity.clamp(0, 100) as u8,
        rain_chance_percent: estimate_rain_chance(label),
        condition: map_condition(label),
    }
}

fn fixed_offset(offset_seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(offset_seconds).unwrap_or_else(|| Utc.fix())
}
