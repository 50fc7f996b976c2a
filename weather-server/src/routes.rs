use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::error;
use weather_core::WeatherReport;

use crate::{error::ApiError, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();

    Router::new()
        .route("/", get(index))
        .route("/api/weather/{city}", get(weather))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/index.html")])
}

async fn weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherReport>, ApiError> {
    let report = state.service.lookup_weather(&city).await.inspect_err(|err| {
        if !err.is_not_found() {
            error!(city = %city, "Error fetching weather data: {err:#}");
        }
    })?;

    Ok(Json(report))
}
