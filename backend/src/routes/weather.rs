use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::Coordinates;
use crate::error::ApiResult;
use crate::provider::Endpoint;
use crate::AppState;

const MISSING_KEY: &str = "Weather API key not configured";

const CURRENT: Endpoint = Endpoint {
    path: "/data/2.5/weather",
    extra_params: &[("units", "metric")],
    missing_key: MISSING_KEY,
    failure: "Failed to fetch weather data",
};

const FORECAST: Endpoint = Endpoint {
    path: "/data/2.5/forecast",
    extra_params: &[("units", "metric")],
    missing_key: MISSING_KEY,
    failure: "Failed to fetch forecast data",
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/weather/current", get(current))
        .route("/api/weather/forecast", get(forecast))
}

async fn current(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> ApiResult<Json<Value>> {
    let (lat, lon) = coords.require()?;
    state.provider.fetch(&CURRENT, lat, lon).await.map(Json)
}

async fn forecast(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> ApiResult<Json<Value>> {
    let (lat, lon) = coords.require()?;
    state.provider.fetch(&FORECAST, lat, lon).await.map(Json)
}
