//! HTTP handlers for weather and location endpoints

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{GpsCoordinates, Location, WeatherSeries};

use crate::error::{AppError, AppResult};
use crate::services::RequestToken;
use crate::AppState;

/// Query parameters for the weather snapshot
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub location: String,
    /// Stable id of the calling device; requests sharing it are ordered
    pub client_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeatherSeriesResponse {
    pub request_token: RequestToken,
    /// The same client issued a newer weather request while this one was in flight
    pub stale: bool,
    pub location: String,
    pub series: WeatherSeries,
}

/// Current conditions plus up to five daily forecast points
///
/// Failures carry `request_token` and `stale` as well, so a caller can
/// discard an outdated error the same way as an outdated success.
pub async fn get_weather_series(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Response {
    let client = query
        .client_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    let fetch = state.weather.fetch_tracked(client, &query.location).await;

    match fetch.result {
        Ok(series) => Json(WeatherSeriesResponse {
            request_token: fetch.token,
            stale: fetch.stale,
            location: query.location.trim().to_string(),
            series,
        })
        .into_response(),
        Err(kind) => AppError::from(kind).into_tracked_response(fetch.token, fetch.stale),
    }
}

/// Query parameters for reverse geocoding
#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Resolve device coordinates to a place name
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> AppResult<Json<Location>> {
    let coordinates = GpsCoordinates::new(query.lat, query.lon);
    shared::validate_coordinates(&coordinates).map_err(|msg| AppError::Validation {
        field: "coordinates".to_string(),
        message: msg.to_string(),
        message_hi: "निर्देशांक मान्य नहीं हैं".to_string(),
    })?;

    let location = state.weather.reverse_geocode(coordinates).await?;
    Ok(Json(location))
}
