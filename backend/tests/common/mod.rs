//! Test fixtures shared by the backend integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crop_planner_backend::external::{ClientError, ClientResult, WeatherProvider};
use shared::{
    GpsCoordinates, OWMCity, OWMCurrentResponse, OWMForecastItem, OWMForecastResponse,
    OWMGeocodeCandidate, OWMMain, OWMWeather,
};

/// 2025-10-18T00:00:00Z
pub const DAY_ZERO: i64 = 1_760_745_600;

/// 2025-10-18T06:00:00Z
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(DAY_ZERO + 6 * 3_600, 0).unwrap()
}

pub fn current_payload(temp: f64, label: &str) -> OWMCurrentResponse {
    OWMCurrentResponse {
        main: OWMMain { temp, humidity: 48 },
        weather: vec![OWMWeather {
            main: label.to_string(),
            description: None,
        }],
        dt: Some(DAY_ZERO + 6 * 3_600),
        timezone: Some(0),
        name: Some("Nagpur".to_string()),
    }
}

/// Six days of samples at 09:00, 12:00, 15:00 and 21:00 UTC; the midday
/// sample of day `n` reads `24.6 + n` degrees
pub fn forecast_payload() -> OWMForecastResponse {
    let mut list = Vec::new();
    for day in 0..6i64 {
        for hour in [9i64, 12, 15, 21] {
            let temp = if hour == 12 { 24.6 + day as f64 } else { 5.0 };
            let label = if day % 2 == 0 { "Clear" } else { "Rain" };
            list.push(OWMForecastItem {
                dt: DAY_ZERO + day * 86_400 + hour * 3_600,
                main: OWMMain { temp, humidity: 60 },
                weather: vec![OWMWeather {
                    main: label.to_string(),
                    description: None,
                }],
            });
        }
    }
    OWMForecastResponse {
        list,
        city: Some(OWMCity {
            name: Some("Nagpur".to_string()),
            timezone: Some(0),
        }),
    }
}

pub fn geocode_candidates() -> Vec<OWMGeocodeCandidate> {
    vec![OWMGeocodeCandidate {
        name: "Nagpur".to_string(),
        lat: 21.15,
        lon: 79.09,
        country: "IN".to_string(),
        state: Some("Maharashtra".to_string()),
    }]
}

pub fn not_found() -> ClientError {
    ClientError::Status {
        status: 404,
        body: r#"{"cod":"404","message":"city not found"}"#.to_string(),
    }
}

pub fn server_error() -> ClientError {
    ClientError::Status {
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

/// Canned weather provider that counts its calls
pub struct FakeProvider {
    pub current: ClientResult<OWMCurrentResponse>,
    pub forecast: ClientResult<OWMForecastResponse>,
    pub geocode: ClientResult<Vec<OWMGeocodeCandidate>>,
    /// Per-city latency applied to both weather lookups
    pub delays: HashMap<String, Duration>,
    pub current_calls: AtomicUsize,
    pub forecast_calls: AtomicUsize,
    pub geocode_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn healthy() -> Self {
        Self {
            current: Ok(current_payload(31.4, "Clear")),
            forecast: Ok(forecast_payload()),
            geocode: Ok(geocode_candidates()),
            delays: HashMap::new(),
            current_calls: AtomicUsize::new(0),
            forecast_calls: AtomicUsize::new(0),
            geocode_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_current(mut self, current: ClientResult<OWMCurrentResponse>) -> Self {
        self.current = current;
        self
    }

    pub fn with_forecast(mut self, forecast: ClientResult<OWMForecastResponse>) -> Self {
        self.forecast = forecast;
        self
    }

    pub fn with_geocode(mut self, geocode: ClientResult<Vec<OWMGeocodeCandidate>>) -> Self {
        self.geocode = geocode;
        self
    }

    pub fn with_delay(mut self, city: &str, delay: Duration) -> Self {
        self.delays.insert(city.to_string(), delay);
        self
    }

    pub fn weather_calls(&self) -> (usize, usize) {
        (
            self.current_calls.load(Ordering::SeqCst),
            self.forecast_calls.load(Ordering::SeqCst),
        )
    }

    async fn latency(&self, city: &str) {
        if let Some(delay) = self.delays.get(city) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn current_conditions(&self, city: &str) -> ClientResult<OWMCurrentResponse> {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        self.latency(city).await;
        self.current.clone()
    }

    async fn forecast(&self, city: &str) -> ClientResult<OWMForecastResponse> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        self.latency(city).await;
        self.forecast.clone()
    }

    async fn reverse_geocode(
        &self,
        _coordinates: GpsCoordinates,
    ) -> ClientResult<Vec<OWMGeocodeCandidate>> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        self.geocode.clone()
    }
}
