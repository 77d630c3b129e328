use super::forecast::aggregate;
use crate::catalog::soil;
use crate::config::{Config, LocationConfig};
use crate::datasources::FarmApiClient;
use crate::db::Database;
use crate::error::{FarmGptError, Result};
use crate::models::WeatherSnapshot;
use chrono::Utc;

/// Runs the location -> place -> weather -> forecast sequence against the backend
pub struct DataSyncService {
    client: FarmApiClient,
    db: Database,
    location: Option<LocationConfig>,
}

impl DataSyncService {
    pub fn new(config: &Config, db: Database) -> Result<Self> {
        if config.location.is_none() {
            tracing::warn!("No farm location configured - weather data will be unavailable");
        }

        Ok(Self {
            client: FarmApiClient::new(&config.backend)?,
            db,
            location: config.location,
        })
    }

    /// Fetch everything for the configured location. Requests run one after
    /// another and the first failure aborts the refresh; the cache is only
    /// replaced when every step succeeded.
    pub async fn refresh(&self) -> Result<WeatherSnapshot> {
        let location = self.location.ok_or_else(|| {
            FarmGptError::LocationUnavailable(
                "no latitude/longitude configured; run `farmgpt init`".into(),
            )
        })?;
        let (lat, lon) = (location.latitude, location.longitude);

        let place = self.client.reverse_geocode(lat, lon).await?;
        tracing::debug!(place = %place.label(), "Resolved location");

        let profile = soil::lookup(&place.state);
        tracing::debug!(soil = profile.soil_type.en, "Soil profile");

        let weather = self.client.fetch_current(lat, lon).await?;
        if weather.is_none() {
            tracing::warn!("Current weather response had no readings");
        }

        let samples = self.client.fetch_forecast(lat, lon).await?;
        let forecast = aggregate(&samples);

        let snapshot = WeatherSnapshot {
            fetched_at: Utc::now(),
            place,
            weather,
            forecast,
        };

        if let Err(e) = self.db.save_snapshot(&snapshot) {
            tracing::warn!("Failed to cache weather snapshot: {}", e);
        }

        tracing::info!(days = snapshot.forecast.len(), "Weather data refreshed");
        Ok(snapshot)
    }

    pub async fn check_connection(&self) -> bool {
        self.client.test_connection().await.unwrap_or(false)
    }
}
