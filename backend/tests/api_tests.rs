//! HTTP API tests
//!
//! Drives the full router with a canned weather provider.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::*;
use crop_planner_backend::{config::Config, create_app, services::WeatherService, AppState};
use proptest::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

fn app(provider: FakeProvider) -> Router {
    let weather = WeatherService::new(Arc::new(provider)).with_clock(fixed_now);
    create_app(AppState {
        config: Arc::new(Config::default()),
        weather,
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// ============================================================================
// Health and soils
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app(FakeProvider::healthy()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");
}

#[tokio::test]
async fn test_list_soils() {
    let (status, body) = get_json(app(FakeProvider::healthy()), "/api/v1/soils").await;

    assert_eq!(status, StatusCode::OK);
    let soils = body.as_array().unwrap();
    assert_eq!(soils.len(), 4);
    assert_eq!(soils[3]["id"], "black_soil");
    assert_eq!(soils[3]["label"], "Black Soil");
}

// ============================================================================
// Crops
// ============================================================================

#[tokio::test]
async fn test_recommendations_for_black_soil() {
    let (status, body) =
        get_json(app(FakeProvider::healthy()), "/api/v1/crops?soil=black_soil").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["soil"], "black_soil");
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0]["name"], "Wheat");
    assert_eq!(recs[0]["high_yield"], true);
    assert_eq!(recs[1]["water_requirement"], "Low");
    assert_eq!(recs[1]["high_yield"], false);
    assert_eq!(
        recs[1]["justification"],
        "Good match for Black Soil soil. Suitable for current dry spell."
    );
}

#[tokio::test]
async fn test_recommendations_accept_display_label() {
    let (status, body) =
        get_json(app(FakeProvider::healthy()), "/api/v1/crops?soil=Black%20Soil").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["soil"], "black_soil");
}

#[tokio::test]
async fn test_unknown_soil_is_rejected() {
    let (status, body) = get_json(app(FakeProvider::healthy()), "/api/v1/crops?soil=peat").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "soil");
}

#[tokio::test]
async fn test_crop_schedule() {
    let (status, body) = get_json(app(FakeProvider::healthy()), "/api/v1/crops/4/schedule").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["crop_name"], "Cotton");
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries[0]["stage"], "sowing");
    assert_eq!(entries[1]["stage"], "first_irrigation");
    assert_eq!(entries[1]["window"], "Jun 30");
    assert_eq!(entries[2]["stage"], "harvest");
}

#[tokio::test]
async fn test_unknown_crop_schedule_is_not_found() {
    let (status, body) = get_json(app(FakeProvider::healthy()), "/api/v1/crops/99/schedule").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// ============================================================================
// Weather
// ============================================================================

#[tokio::test]
async fn test_weather_series() {
    let (status, body) =
        get_json(app(FakeProvider::healthy()), "/api/v1/weather?location=Nagpur").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Nagpur");
    assert_eq!(body["request_token"], 1);
    assert_eq!(body["stale"], false);
    let series = body["series"].as_array().unwrap();
    assert_eq!(series.len(), 6);
    assert_eq!(series[0]["date"], "Oct 18");
    assert_eq!(series[0]["condition"], "Sunny");
}

#[tokio::test]
async fn test_weather_invalid_location() {
    let provider = FakeProvider::healthy().with_current(Err(not_found()));
    let (status, body) = get_json(app(provider), "/api/v1/weather?location=Nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "INVALID_LOCATION");
    assert_eq!(body["error"]["message_key"], "invalidLocation");
    assert_eq!(body["request_token"], 1);
    assert_eq!(body["stale"], false);
}

#[tokio::test]
async fn test_weather_unavailable() {
    let provider = FakeProvider::healthy().with_forecast(Err(server_error()));
    let (status, body) = get_json(app(provider), "/api/v1/weather?location=Nagpur").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["message_key"], "weatherError");
    assert!(body["error"]["message_hi"].as_str().is_some());
}

#[tokio::test]
async fn test_weather_without_location() {
    let (status, body) = get_json(app(FakeProvider::healthy()), "/api/v1/weather").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "EMPTY_LOCATION");
    assert_eq!(body["request_token"], 1);
}

#[tokio::test]
async fn test_overlapping_clients_are_both_current() {
    let provider = FakeProvider::healthy().with_delay("Slowtown", Duration::from_millis(50));
    let router = app(provider);

    let ((status_a, a), (status_b, b)) = tokio::join!(
        get_json(
            router.clone(),
            "/api/v1/weather?location=Slowtown&client_id=phone-a"
        ),
        get_json(router, "/api/v1/weather?location=Fastville&client_id=phone-b")
    );

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(a["stale"], false);
    assert_eq!(b["stale"], false);
    assert_ne!(a["request_token"], b["request_token"]);
}

#[tokio::test]
async fn test_superseded_error_is_marked_stale() {
    let provider = FakeProvider::healthy()
        .with_current(Err(not_found()))
        .with_delay("Nowhere", Duration::from_millis(50));
    let router = app(provider);

    let ((status_old, old), (_, new)) = tokio::join!(
        get_json(
            router.clone(),
            "/api/v1/weather?location=Nowhere&client_id=phone-a"
        ),
        async {
            // Start once the first request holds its token
            tokio::time::sleep(Duration::from_millis(10)).await;
            get_json(router, "/api/v1/weather?location=Elsewhere&client_id=phone-a").await
        }
    );

    assert_eq!(status_old, StatusCode::NOT_FOUND);
    assert_eq!(old["error"]["code"], "INVALID_LOCATION");
    assert_eq!(old["stale"], true);
    assert_eq!(new["stale"], false);
    assert!(old["request_token"].as_u64() < new["request_token"].as_u64());
}

// ============================================================================
// Location
// ============================================================================

#[tokio::test]
async fn test_reverse_geocode() {
    let (status, body) = get_json(
        app(FakeProvider::healthy()),
        "/api/v1/location/reverse?lat=21.15&lon=79.09",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nagpur");
    assert_eq!(body["state"], "Maharashtra");
}

#[tokio::test]
async fn test_reverse_geocode_bad_coordinates() {
    let (status, body) = get_json(
        app(FakeProvider::healthy()),
        "/api/v1/location/reverse?lat=95&lon=79.09",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "coordinates");
}

#[tokio::test]
async fn test_reverse_geocode_nothing_found() {
    let provider = FakeProvider::healthy().with_geocode(Ok(vec![]));
    let (status, body) =
        get_json(app(provider), "/api/v1/location/reverse?lat=0&lon=-150").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message_key"], "locationError");
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn soil_param_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("loamy"),
        Just("clay"),
        Just("sandy"),
        Just("black_soil"),
        Just("Loamy"),
        Just("CLAY"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Every soil yields at most three recommendations, all compatible
    #[test]
    fn prop_recommendations_capped(soil in soil_param_strategy()) {
        let uri = format!("/api/v1/crops?soil={}", soil);
        let (status, body) = tokio_test::block_on(get_json(app(FakeProvider::healthy()), &uri));

        prop_assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        prop_assert!(recs.len() <= 3);
        let slug = body["soil"].as_str().unwrap().to_string();
        for rec in recs {
            let soils: Vec<_> = rec["suitable_soils"]
                .as_array()
                .unwrap()
                .iter()
                .map(|s| s.as_str().unwrap().to_string())
                .collect();
            prop_assert!(soils.contains(&slug));
        }
    }
}
