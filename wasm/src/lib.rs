//! WebAssembly module for the Crop Planner
//!
//! Provides client-side computation for:
//! - Crop recommendations by soil type
//! - Weather condition mapping and rain estimates
//! - Forecast normalization for payloads fetched in the browser

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

use shared::{
    estimate_rain_chance as rain_chance_for, find_crop, map_condition, normalize_forecast_series,
    select_recommendations, validate_forecast_payload, OWMForecastResponse,
};

fn js_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(format!("Serialization failed: {}", e)))
}

/// Soil categories as `[{"id": ..., "label": ...}]`
#[wasm_bindgen]
pub fn list_soil_types() -> String {
    let soils: Vec<_> = SoilCategory::ALL
        .into_iter()
        .map(|soil| serde_json::json!({ "id": soil, "label": soil.label() }))
        .collect();
    serde_json::Value::Array(soils).to_string()
}

/// Up to three crops for the soil, with justifications, as JSON
#[wasm_bindgen]
pub fn recommend_crops(soil: &str) -> Result<String, JsValue> {
    let soil: SoilCategory = soil.parse().map_err(|e| js_error(format!("{}", e)))?;
    to_json(&select_recommendations(soil))
}

/// Sowing, irrigation and harvest windows for a crop id, as JSON
#[wasm_bindgen]
pub fn crop_action_schedule(crop_id: &str) -> Result<String, JsValue> {
    let crop = find_crop(crop_id).ok_or_else(|| js_error(format!("Unknown crop id: {}", crop_id)))?;
    to_json(&crop.action_schedule())
}

/// Map a provider condition label to Sunny, Cloudy, Rainy or Stormy
#[wasm_bindgen]
pub fn map_weather_condition(label: &str) -> String {
    map_condition(label).to_string()
}

#[wasm_bindgen]
pub fn estimate_rain_chance(label: &str) -> u8 {
    rain_chance_for(label)
}

/// Normalize a raw 5-day/3-hour forecast payload into daily points
#[wasm_bindgen]
pub fn normalize_forecast(payload_json: &str) -> Result<String, JsValue> {
    let payload: OWMForecastResponse = serde_json::from_str(payload_json)
        .map_err(|e| js_error(format!("Invalid forecast JSON: {}", e)))?;
    validate_forecast_payload(&payload).map_err(|e| js_error(e.to_string()))?;

    to_json(&normalize_forecast_series(&payload))
}
