//! Error responses for the proxy endpoints.
//!
//! Every failure is rendered as `{"error": "<message>"}` except provider
//! errors, whose status and JSON body are passed through untouched.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("lat and lon are required")]
    MissingCoordinates,

    #[error("{0}")]
    MissingApiKey(&'static str),

    #[error("provider returned {status}")]
    Upstream { status: StatusCode, body: Value },

    #[error("{0}")]
    Fetch(&'static str),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = match self {
            ApiError::Upstream { status, body } => return (status, Json(body)).into_response(),
            ApiError::MissingCoordinates => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey(_) | ApiError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
