use crate::config::BackendConfig;
use crate::error::{FarmGptError, Result};
use crate::logic::calculations::{meters_to_km, ms_to_kmh, round_half_up};
use crate::models::{CurrentWeather, ForecastSample, Place, UNKNOWN_PLACE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_ICON: &str = "01d";
const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

/// Client for the FarmGPT backend, which proxies the weather provider
pub struct FarmApiClient {
    client: reqwest::Client,
    base_url: String,
}

// Provider payloads as relayed by the backend
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: Option<OwmMain>,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    wind: Option<OwmWind>,
    rain: Option<OwmRain>,
    visibility: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    #[serde(default)]
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    humidity: f64,
    #[serde(default)]
    pressure: f64,
    #[serde(default)]
    temp_min: f64,
    #[serde(default)]
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    #[serde(default)]
    description: String,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Option<Vec<OwmForecastItem>>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: Option<OwmMain>,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    rain: Option<OwmRain>,
    dt_txt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmGeocodeEntry {
    name: Option<String>,
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl FarmApiClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// City and state for a coordinate pair
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<Place> {
        let entries: Vec<OwmGeocodeEntry> = self
            .get_json("/api/geocode/reverse", latitude, longitude)
            .await?;
        Ok(place_from_geocode(latitude, longitude, entries))
    }

    /// Current conditions; None when the provider sent no readings
    pub async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<Option<CurrentWeather>> {
        let response: OwmCurrentResponse = self
            .get_json("/api/weather/current", latitude, longitude)
            .await?;
        Ok(current_from_response(response))
    }

    /// 3-hour forecast samples in provider order
    pub async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<Vec<ForecastSample>> {
        let response: OwmForecastResponse = self
            .get_json("/api/weather/forecast", latitude, longitude)
            .await?;
        Ok(samples_from_forecast(response))
    }

    /// Test connection to the backend
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FarmGptError::DataSourceUnavailable(format!("Backend: {}", e)))?;

        Ok(response.status().is_success())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<T> {
        let url = format!(
            "{}{}?lat={}&lon={}",
            self.base_url, path, latitude, longitude
        );
        tracing::debug!(%url, "Requesting backend");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FarmGptError::DataSourceUnavailable(format!("Backend: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(FarmGptError::DataSourceUnavailable(format!(
                "Backend returned {} for {}: {}",
                status, path, detail
            )));
        }

        response.json().await.map_err(|e| {
            FarmGptError::InvalidData(format!("Failed to parse response from {}: {}", path, e))
        })
    }
}

/// Treats zero like a missing value, the way the provider's optional fields are read
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn current_from_response(response: OwmCurrentResponse) -> Option<CurrentWeather> {
    let main = response.main?;
    let condition = response.weather.into_iter().next();

    let rainfall_mm = response
        .rain
        .and_then(|r| non_zero(r.one_hour).or(non_zero(r.three_hour)))
        .unwrap_or(0.0);
    let visibility_m = non_zero(response.visibility).unwrap_or(DEFAULT_VISIBILITY_M);

    Some(CurrentWeather {
        temp: round_half_up(main.temp),
        feels_like: round_half_up(main.feels_like),
        humidity: main.humidity,
        pressure: main.pressure,
        wind_speed_kmh: ms_to_kmh(response.wind.map(|w| w.speed).unwrap_or(0.0)),
        description: condition
            .as_ref()
            .map(|c| c.description.clone())
            .unwrap_or_default(),
        icon: condition
            .and_then(|c| c.icon)
            .unwrap_or_else(|| DEFAULT_ICON.to_string()),
        rainfall_mm,
        visibility_km: meters_to_km(visibility_m),
        temp_min: round_half_up(main.temp_min),
        temp_max: round_half_up(main.temp_max),
    })
}

fn samples_from_forecast(response: OwmForecastResponse) -> Vec<ForecastSample> {
    let items = response.list.unwrap_or_default();
    let total = items.len();

    let samples: Vec<ForecastSample> = items.into_iter().filter_map(sample_from_item).collect();
    if samples.len() < total {
        tracing::warn!(
            skipped = total - samples.len(),
            "Dropped forecast entries without readings or date"
        );
    }
    samples
}

fn sample_from_item(item: OwmForecastItem) -> Option<ForecastSample> {
    let main = item.main?;
    let date = item
        .dt_txt
        .as_deref()
        .and_then(|txt| txt.split(' ').next())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .or_else(|| ForecastSample::date_from_timestamp(item.dt))?;
    let condition = item.weather.into_iter().next();

    Some(ForecastSample {
        timestamp: item.dt,
        date,
        temp_min: main.temp_min,
        temp_max: main.temp_max,
        humidity: main.humidity,
        rainfall_mm: item.rain.and_then(|r| r.three_hour).unwrap_or(0.0),
        description: condition
            .as_ref()
            .map(|c| c.description.clone())
            .unwrap_or_default(),
        icon: condition
            .and_then(|c| c.icon)
            .unwrap_or_else(|| DEFAULT_ICON.to_string()),
    })
}

fn place_from_geocode(latitude: f64, longitude: f64, entries: Vec<OwmGeocodeEntry>) -> Place {
    let Some(first) = entries.into_iter().next() else {
        return Place::unknown(latitude, longitude);
    };
    let or_unknown = |v: Option<String>| {
        v.filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string())
    };

    Place {
        latitude,
        longitude,
        city: or_unknown(first.name),
        state: or_unknown(first.state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current(value: serde_json::Value) -> Option<CurrentWeather> {
        current_from_response(serde_json::from_value(value).unwrap())
    }

    fn forecast(value: serde_json::Value) -> Vec<ForecastSample> {
        samples_from_forecast(serde_json::from_value(value).unwrap())
    }

    fn geocode(value: serde_json::Value) -> Place {
        place_from_geocode(26.85, 80.95, serde_json::from_value(value).unwrap())
    }

    #[test]
    fn current_weather_is_converted_to_display_units() {
        let weather = current(json!({
            "main": {"temp": 31.6, "feels_like": 35.2, "humidity": 70, "pressure": 1004,
                     "temp_min": 30.4, "temp_max": 32.5},
            "weather": [{"description": "haze", "icon": "50d"}],
            "wind": {"speed": 3.5},
            "rain": {"1h": 0.8},
            "visibility": 6500
        }))
        .unwrap();

        assert_eq!(weather.temp, 32.0);
        assert_eq!(weather.feels_like, 35.0);
        assert_eq!(weather.humidity, 70.0);
        assert_eq!(weather.wind_speed_kmh, 13.0);
        assert_eq!(weather.rainfall_mm, 0.8);
        assert_eq!(weather.visibility_km, 7.0);
        assert_eq!(weather.temp_min, 30.0);
        assert_eq!(weather.temp_max, 33.0);
        assert_eq!(weather.icon, "50d");
        assert_eq!(weather.description, "haze");
    }

    #[test]
    fn current_weather_defaults() {
        let weather = current(json!({
            "main": {"temp": 25.0, "humidity": 50},
            "rain": {"3h": 2.4}
        }))
        .unwrap();

        assert_eq!(weather.icon, "01d");
        assert_eq!(weather.description, "");
        assert_eq!(weather.rainfall_mm, 2.4);
        assert_eq!(weather.visibility_km, 10.0);
        assert_eq!(weather.wind_speed_kmh, 0.0);
    }

    #[test]
    fn current_weather_without_main_is_none() {
        assert!(current(json!({"cod": 200, "weather": []})).is_none());
    }

    #[test]
    fn forecast_samples_use_dt_txt_date() {
        let samples = forecast(json!({
            "list": [
                {"dt": 1717200000, "dt_txt": "2024-06-01 00:00:00",
                 "main": {"temp_min": 20.0, "temp_max": 28.0, "humidity": 65},
                 "weather": [{"description": "light rain", "icon": "10n"}],
                 "rain": {"3h": 1.2}},
                {"dt": 1717210800,
                 "main": {"temp_min": 18.0, "temp_max": 30.0, "humidity": 60},
                 "weather": [{"description": "clear sky", "icon": "01d"}]}
            ]
        }));

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].date, "2024-06-01");
        assert_eq!(samples[0].rainfall_mm, 1.2);
        assert_eq!(samples[0].icon, "10n");
        assert_eq!(samples[1].date, "2024-06-01");
        assert_eq!(samples[1].rainfall_mm, 0.0);
    }

    #[test]
    fn forecast_without_list_is_empty() {
        assert!(forecast(json!({"cod": "200"})).is_empty());
    }

    #[test]
    fn forecast_skips_entries_without_readings() {
        let samples = forecast(json!({
            "list": [
                {"dt": 1717200000, "dt_txt": "2024-06-01 00:00:00"},
                {"dt": 1717200000, "dt_txt": "2024-06-01 00:00:00",
                 "main": {"temp_min": 20.0, "temp_max": 28.0, "humidity": 65}}
            ]
        }));
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn geocode_takes_first_entry() {
        let place = geocode(json!([
            {"name": "Lucknow", "state": "Uttar Pradesh", "country": "IN"},
            {"name": "Other", "state": "Other"}
        ]));
        assert_eq!(place.city, "Lucknow");
        assert_eq!(place.state, "Uttar Pradesh");
        assert_eq!(place.latitude, 26.85);
    }

    #[test]
    fn geocode_missing_fields_are_unknown() {
        assert_eq!(geocode(json!([])).label(), "Unknown, Unknown");
        let place = geocode(json!([{"name": "Lucknow", "state": ""}]));
        assert_eq!(place.city, "Lucknow");
        assert_eq!(place.state, "Unknown");
    }

    #[tokio::test]
    async fn unreachable_backend_is_unavailable() {
        let client = FarmApiClient::new(&BackendConfig {
            url: "http://127.0.0.1:1".into(),
            timeout_secs: 2,
        })
        .unwrap();

        let err = client.fetch_current(26.85, 80.95).await.unwrap_err();
        assert!(matches!(err, FarmGptError::DataSourceUnavailable(_)));
        assert!(client.test_connection().await.is_err());
    }
}
