//! FarmGPT backend: a thin proxy in front of the weather provider.
//!
//! Keeps the provider API key on the server and exposes current weather,
//! the 5-day/3-hour forecast and reverse geocoding to the terminal client.

use std::net::SocketAddr;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod provider;
mod routes;

use config::Config;
use provider::WeatherProvider;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: WeatherProvider,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::load_from_env()?;
    config.log_config();

    let state = AppState {
        provider: WeatherProvider::new(&config)?,
    };
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();
}

/// Router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
