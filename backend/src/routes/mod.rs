//! Route definitions for the Crop Planner

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/soils", get(handlers::list_soils))
        .nest("/crops", crop_routes())
        .route("/weather", get(handlers::get_weather_series))
        .route("/location/reverse", get(handlers::reverse_geocode))
}

/// Crop recommendation routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::recommend_crops))
        .route("/:crop_id/schedule", get(handlers::get_crop_schedule))
}
