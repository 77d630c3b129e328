use super::forecast::{CurrentWeather, DailySummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_PLACE: &str = "Unknown";

/// Resolved position of the farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
}

impl Place {
    pub fn unknown(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: UNKNOWN_PLACE.to_string(),
            state: UNKNOWN_PLACE.to_string(),
        }
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Everything fetched in one refresh; cached so the last good data survives a failed refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub place: Place,
    pub weather: Option<CurrentWeather>,
    pub forecast: Vec<DailySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_place_label() {
        let place = Place::unknown(26.85, 80.95);
        assert_eq!(place.label(), "Unknown, Unknown");
    }
}
