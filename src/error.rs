use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use serde_json::error::Category;
use serde_json::json;
use thiserror::Error;

/// Everything that can stop a scheduled weather check.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("payload has no settings, cannot determine location")]
    MissingLocation,
    #[error("could not reach weather api: {source}")]
    WeatherRequest {
        #[source]
        source: reqwest::Error,
    },
    #[error("weather api responded with {status}")]
    WeatherStatus { status: reqwest::StatusCode },
    #[error("invalid weather api response: {source}")]
    WeatherDecoding {
        #[from]
        source: serde_json::Error,
    },
    #[error("could not post report to {url}: {source}")]
    Callback {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors answered directly on the incoming request.
#[derive(Debug)]
pub enum ApiError {
    /// The body was declared as something other than JSON.
    UnsupportedMediaType(String),
    InvalidPayload(serde_json::Error),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidPayload(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::UnsupportedMediaType(content_type) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Expected a JSON body, got `{}`", content_type),
            ),
            ApiError::InvalidPayload(err) => {
                let status = match err.classify() {
                    Category::Data => StatusCode::UNPROCESSABLE_ENTITY,
                    Category::Io | Category::Syntax | Category::Eof => StatusCode::BAD_REQUEST,
                };
                (status, format!("Invalid tick payload: {}", err))
            }
        };
        // Logging in the conversion keeps the handlers free of it.
        warn!("Rejected tick: {}", detail);
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
