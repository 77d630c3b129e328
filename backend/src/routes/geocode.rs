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

const REVERSE: Endpoint = Endpoint {
    path: "/geo/1.0/reverse",
    extra_params: &[("limit", "1")],
    missing_key: "API key not configured",
    failure: "Failed to reverse geocode",
};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/geocode/reverse", get(reverse))
}

async fn reverse(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> ApiResult<Json<Value>> {
    let (lat, lon) = coords.require()?;
    state.provider.fetch(&REVERSE, lat, lon).await.map(Json)
}
