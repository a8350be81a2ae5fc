//! Weather service: fetches and normalizes the weather snapshot for a place

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::{
    current_point, local_date, location_from_candidates, normalize_forecast_series,
    validate_coordinates, validate_location_query, GpsCoordinates, Location, WeatherErrorKind,
    WeatherSeries,
};

use super::request_tracker::{RequestToken, RequestTracker};
use crate::external::weather::{ClientError, WeatherProvider};

/// Source of the current time, replaceable in tests
pub type Clock = fn() -> DateTime<Utc>;

/// Outcome of a fetch tagged with its request token
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedFetch {
    pub token: RequestToken,
    /// A newer fetch was issued while this one was in flight
    pub stale: bool,
    pub result: Result<WeatherSeries, WeatherErrorKind>,
}

/// Weather service for turning a location into a weather series
#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    tracker: Arc<RequestTracker>,
    clock: Clock,
}

impl WeatherService {
    /// Create a new WeatherService backed by `provider`
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            tracker: Arc::new(RequestTracker::new()),
            clock: Utc::now,
        }
    }

    /// Replace the clock used to label current conditions
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// Fetch current conditions and the forecast for `location` and merge them.
    ///
    /// Both lookups run concurrently and are awaited jointly. The current
    /// conditions gate first: a rejected lookup means the place is unknown.
    /// Any forecast failure, or a transport failure on either call, means the
    /// weather is unavailable. A blank location fails without any remote call.
    pub async fn fetch_weather_series(
        &self,
        location: &str,
    ) -> Result<WeatherSeries, WeatherErrorKind> {
        let city = validate_location_query(location)?;

        let (current, forecast) = tokio::join!(
            self.provider.current_conditions(city),
            self.provider.forecast(city)
        );

        let current = current.map_err(|e| {
            tracing::info!("Current conditions for {:?} unavailable: {}", city, e);
            match e {
                ClientError::Status { .. } => WeatherErrorKind::InvalidLocation,
                _ => WeatherErrorKind::WeatherUnavailable,
            }
        })?;

        let forecast = forecast.map_err(|e| {
            tracing::info!("Forecast for {:?} unavailable: {}", city, e);
            WeatherErrorKind::WeatherUnavailable
        })?;

        let offset = current
            .timezone
            .unwrap_or_else(|| forecast.timezone_offset_seconds());
        let today = local_date((self.clock)(), offset);

        let series = WeatherSeries::new(
            current_point(&current, today),
            normalize_forecast_series(&forecast),
        );
        tracing::debug!("Weather series for {:?}: {} points", city, series.len());

        Ok(series)
    }

    /// Like [`Self::fetch_weather_series`], but tagged with a request token so
    /// callers can drop results overtaken by a newer request of their own.
    /// Only requests from the same `client` supersede each other.
    pub async fn fetch_tracked(&self, client: Option<&str>, location: &str) -> TrackedFetch {
        let token = self.tracker.issue(client);
        let result = self.fetch_weather_series(location).await;
        let stale = !self.tracker.is_latest(client, token);

        if stale {
            tracing::debug!(
                "Weather request {} from {:?} was superseded",
                token.value(),
                client
            );
        }

        TrackedFetch {
            token,
            stale,
            result,
        }
    }

    /// Resolve device coordinates to a place name
    pub async fn reverse_geocode(
        &self,
        coordinates: GpsCoordinates,
    ) -> Result<Location, WeatherErrorKind> {
        validate_coordinates(&coordinates).map_err(|_| WeatherErrorKind::LocationNotFound)?;

        let candidates = self
            .provider
            .reverse_geocode(coordinates)
            .await
            .map_err(|e| {
                tracing::info!("Reverse geocoding failed: {}", e);
                WeatherErrorKind::LocationNotFound
            })?;

        location_from_candidates(&candidates).ok_or(WeatherErrorKind::LocationNotFound)
    }
}
