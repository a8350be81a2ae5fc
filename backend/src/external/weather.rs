//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for current conditions, 5-day forecasts and
//! reverse geocoding. Payloads are shape-checked before they leave the client.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    validate_current_payload, validate_forecast_payload, GpsCoordinates, OWMCurrentResponse,
    OWMForecastResponse, OWMGeocodeCandidate, PayloadError,
};
use thiserror::Error;

use crate::config::{WeatherConfig, DEFAULT_GEO_ENDPOINT, DEFAULT_WEATHER_ENDPOINT};

/// Failures talking to the weather API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Weather API request failed: {0}")]
    Transport(String),

    #[error("Weather API error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse weather response: {0}")]
    Decode(String),

    #[error("Unusable weather response: {0}")]
    Shape(#[from] PayloadError),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Source of raw weather payloads
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a city name
    async fn current_conditions(&self, city: &str) -> ClientResult<OWMCurrentResponse>;

    /// 5-day / 3-hour forecast for a city name
    async fn forecast(&self, city: &str) -> ClientResult<OWMForecastResponse>;

    /// Place candidates near the given coordinates
    async fn reverse_geocode(
        &self,
        coordinates: GpsCoordinates,
    ) -> ClientResult<Vec<OWMGeocodeCandidate>>;
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    geo_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(
            api_key,
            DEFAULT_WEATHER_ENDPOINT.to_string(),
            DEFAULT_GEO_ENDPOINT.to_string(),
        )
    }

    /// Create a new WeatherClient with custom base URLs (for testing)
    pub fn with_base_url(api_key: String, base_url: String, geo_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            geo_url: geo_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::with_base_url(
            config.api_key.clone(),
            config.api_endpoint.clone(),
            config.geo_endpoint.clone(),
        )
    }

    /// GET `url` with `query` plus the API key and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                // without_url keeps the API key out of the logs
                let e = e.without_url();
                tracing::warn!("Weather API request to {} failed: {}", url, e);
                ClientError::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API {} returned {}", url, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            tracing::warn!("Weather API {} returned malformed JSON: {}", url, e);
            ClientError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn current_conditions(&self, city: &str) -> ClientResult<OWMCurrentResponse> {
        let url = format!("{}/weather", self.base_url);
        let data: OWMCurrentResponse = self
            .get_json(&url, &[("q", city.to_string()), ("units", "metric".to_string())])
            .await?;

        validate_current_payload(&data)?;
        Ok(data)
    }

    async fn forecast(&self, city: &str) -> ClientResult<OWMForecastResponse> {
        let url = format!("{}/forecast", self.base_url);
        let data: OWMForecastResponse = self
            .get_json(&url, &[("q", city.to_string()), ("units", "metric".to_string())])
            .await?;

        validate_forecast_payload(&data)?;
        Ok(data)
    }

    async fn reverse_geocode(
        &self,
        coordinates: GpsCoordinates,
    ) -> ClientResult<Vec<OWMGeocodeCandidate>> {
        let url = format!("{}/reverse", self.geo_url);
        self.get_json(
            &url,
            &[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("limit", "1".to_string()),
            ],
        )
        .await
    }
}
