use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use weather_core::LookupError;

/// HTTP face of a failed lookup: a status code and a `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError(LookupError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LookupError::LocationNotFound | LookupError::ConditionsNotFound => {
                StatusCode::NOT_FOUND
            }
            LookupError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Upstream details stay in the logs.
    pub fn message(&self) -> &'static str {
        match self.0 {
            LookupError::LocationNotFound => "Location not found",
            LookupError::ConditionsNotFound => "Weather data not found",
            LookupError::Upstream(_) => "Failed to fetch weather data",
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
