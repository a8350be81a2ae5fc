//! Error handling for the Crop Planner
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{Language, WeatherErrorKind};
use thiserror::Error;

use crate::services::RequestToken;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Weather and location lookups
    #[error("Weather lookup failed: {0}")]
    Weather(#[from] WeatherErrorKind),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error body for a weather request, tagged so callers can drop it when a
/// newer request of theirs is in flight
#[derive(Serialize)]
pub struct TrackedErrorResponse {
    pub request_token: RequestToken,
    pub stale: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_key: Option<String>,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Weather(kind) => match kind {
                WeatherErrorKind::EmptyLocation => StatusCode::BAD_REQUEST,
                WeatherErrorKind::InvalidLocation => StatusCode::NOT_FOUND,
                WeatherErrorKind::LocationNotFound => StatusCode::NOT_FOUND,
                WeatherErrorKind::WeatherUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            },
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Weather(kind) => ErrorDetail {
                code: kind.code().to_string(),
                message_key: Some(kind.message_key().to_string()),
                message_en: kind.message(Language::English).to_string(),
                message_hi: kind.message(Language::Hindi).to_string(),
                field: None,
            },
            AppError::Validation {
                field,
                message,
                message_hi,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_key: None,
                message_en: message.clone(),
                message_hi: message_hi.clone(),
                field: Some(field.clone()),
            },
            AppError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_key: None,
                message_en: format!("{} not found", resource),
                message_hi: format!("{} नहीं मिला", resource),
                field: None,
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message_key: None,
                message_en: format!("Configuration error: {}", msg),
                message_hi: "सर्वर कॉन्फ़िगरेशन में त्रुटि".to_string(),
                field: None,
            },
        }
    }
}

impl AppError {
    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {:?}", self);
        }
    }

    /// Render the error with the request token of the weather fetch it ended
    pub fn into_tracked_response(self, request_token: RequestToken, stale: bool) -> Response {
        let status = self.status();
        self.log(status);

        let body = TrackedErrorResponse {
            request_token,
            stale,
            error: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        self.log(status);

        (status, Json(ErrorResponse { error: self.detail() })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
