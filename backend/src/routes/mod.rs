//! Route gateway: merges the per-resource subrouters.

use axum::Router;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

mod geocode;
mod health;
mod weather;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(weather::router())
        .merge(geocode::router())
}

/// `lat`/`lon` query parameters, kept as the caller wrote them.
#[derive(Debug, Deserialize)]
pub struct Coordinates {
    lat: Option<String>,
    lon: Option<String>,
}

impl Coordinates {
    pub fn require(&self) -> ApiResult<(&str, &str)> {
        match (self.lat.as_deref(), self.lon.as_deref()) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => Ok((lat, lon)),
            _ => Err(ApiError::MissingCoordinates),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        body::Body,
        extract::Query,
        http::{Request, StatusCode},
        routing::get,
        Json,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::provider::WeatherProvider;
    use crate::{create_app, AppState};

    async fn echo(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        Json(json!({ "params": params }))
    }

    async fn unauthorized() -> (StatusCode, Json<Value>) {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "cod": 401, "message": "Invalid API key" })),
        )
    }

    async fn not_json() -> &'static str {
        "<html>bad gateway</html>"
    }

    /// Serve `stub` on an ephemeral port and return its base URL.
    async fn spawn_provider(stub: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub).await.ok();
        });
        format!("http://{}", addr)
    }

    async fn default_provider() -> String {
        spawn_provider(
            axum::Router::new()
                .route("/data/2.5/weather", get(echo))
                .route("/data/2.5/forecast", get(unauthorized))
                .route("/geo/1.0/reverse", get(echo)),
        )
        .await
    }

    fn app(base_url: &str, api_key: Option<&str>) -> axum::Router {
        let config = Config {
            api_key: api_key.map(String::from),
            port: 0,
            provider_base_url: base_url.to_string(),
        };
        create_app(AppState {
            provider: WeatherProvider::new(&config).unwrap(),
        })
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_json(app("http://127.0.0.1:1", None), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn missing_coordinates_are_rejected() {
        for uri in [
            "/api/weather/current",
            "/api/weather/current?lat=26.85",
            "/api/weather/forecast?lon=80.95",
            "/api/geocode/reverse?lat=&lon=80.95",
            "/api/geocode/reverse?lat=26.85&lon=",
        ] {
            let (status, body) = get_json(app("http://127.0.0.1:1", Some("key")), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body, json!({ "error": "lat and lon are required" }), "{}", uri);
        }
    }

    #[tokio::test]
    async fn coordinates_are_checked_before_the_key() {
        let (status, _) = get_json(app("http://127.0.0.1:1", None), "/api/weather/current").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_key_is_reported_per_endpoint() {
        let query = "?lat=26.85&lon=80.95";
        let cases = [
            ("/api/weather/current", "Weather API key not configured"),
            ("/api/weather/forecast", "Weather API key not configured"),
            ("/api/geocode/reverse", "API key not configured"),
        ];
        for (path, message) in cases {
            let uri = format!("{}{}", path, query);
            let (status, body) = get_json(app("http://127.0.0.1:1", None), &uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", path);
            assert_eq!(body, json!({ "error": message }), "{}", path);
        }
    }

    #[tokio::test]
    async fn current_weather_is_proxied_with_metric_units() {
        let base = default_provider().await;
        let (status, body) = get_json(
            app(&base, Some("test-key")),
            "/api/weather/current?lat=26.85&lon=80.95",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["params"],
            json!({ "lat": "26.85", "lon": "80.95", "appid": "test-key", "units": "metric" })
        );
    }

    #[tokio::test]
    async fn reverse_geocode_asks_for_one_result() {
        let base = default_provider().await;
        let (status, body) = get_json(
            app(&base, Some("test-key")),
            "/api/geocode/reverse?lat=19.07&lon=72.87",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["params"],
            json!({ "lat": "19.07", "lon": "72.87", "appid": "test-key", "limit": "1" })
        );
    }

    #[tokio::test]
    async fn provider_errors_pass_through() {
        let base = default_provider().await;
        let (status, body) = get_json(
            app(&base, Some("bad-key")),
            "/api/weather/forecast?lat=26.85&lon=80.95",
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "cod": 401, "message": "Invalid API key" }));
    }

    #[tokio::test]
    async fn unreachable_provider_is_internal_error() {
        let (status, body) = get_json(
            app("http://127.0.0.1:1", Some("test-key")),
            "/api/weather/current?lat=26.85&lon=80.95",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch weather data" }));
    }

    #[tokio::test]
    async fn unreadable_provider_body_is_internal_error() {
        let base =
            spawn_provider(axum::Router::new().route("/geo/1.0/reverse", get(not_json))).await;
        let (status, body) = get_json(
            app(&base, Some("test-key")),
            "/api/geocode/reverse?lat=26.85&lon=80.95",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to reverse geocode" }));
    }
}
