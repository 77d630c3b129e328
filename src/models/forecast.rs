use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single 3-hour forecast sample as delivered by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: i64,
    pub date: String, // YYYY-MM-DD, provider's own date split
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub rainfall_mm: f64,
    pub description: String,
    pub icon: String,
}

impl ForecastSample {
    /// Date key for a timestamp when the provider did not supply one.
    pub fn date_from_timestamp(timestamp: i64) -> Option<String> {
        DateTime::<Utc>::from_timestamp(timestamp, 0)
            .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
    }
}

/// One calendar day of aggregated forecast samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: String,
    pub day_name: String,
    pub temp_min: f64,
    pub temp_max: f64,
    pub rainfall_mm: f64,
    pub humidity: f64,
    pub description: String,
    pub icon: String,
}

/// Current conditions, already converted to display units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed_kmh: f64,
    pub description: String,
    pub icon: String,
    pub rainfall_mm: f64,
    pub visibility_km: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

impl CurrentWeather {
    /// Description with its first letter capitalised.
    pub fn display_description(&self) -> String {
        let mut chars = self.description.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Weather icon categories from provider icon codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherIcon {
    #[default]
    Sunny,
    PartlySunny,
    Cloudy,
    Rainy,
    Thunderstorm,
    Snow,
    Mist,
}

impl WeatherIcon {
    pub fn from_code(code: &str) -> Self {
        if code.contains("01") {
            WeatherIcon::Sunny
        } else if code.contains("02") {
            WeatherIcon::PartlySunny
        } else if code.contains("03") || code.contains("04") {
            WeatherIcon::Cloudy
        } else if code.contains("09") || code.contains("10") {
            WeatherIcon::Rainy
        } else if code.contains("11") {
            WeatherIcon::Thunderstorm
        } else if code.contains("13") {
            WeatherIcon::Snow
        } else if code.contains("50") {
            WeatherIcon::Mist
        } else {
            WeatherIcon::Sunny
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "☀",
            WeatherIcon::PartlySunny => "⛅",
            WeatherIcon::Cloudy => "☁",
            WeatherIcon::Rainy => "🌧",
            WeatherIcon::Thunderstorm => "⛈",
            WeatherIcon::Snow => "❄",
            WeatherIcon::Mist => "🌫",
        }
    }

    pub fn has_precipitation(&self) -> bool {
        matches!(
            self,
            WeatherIcon::Rainy | WeatherIcon::Thunderstorm | WeatherIcon::Snow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_icon_from_code() {
        assert_eq!(WeatherIcon::from_code("01d"), WeatherIcon::Sunny);
        assert_eq!(WeatherIcon::from_code("02n"), WeatherIcon::PartlySunny);
        assert_eq!(WeatherIcon::from_code("04d"), WeatherIcon::Cloudy);
        assert_eq!(WeatherIcon::from_code("10d"), WeatherIcon::Rainy);
        assert_eq!(WeatherIcon::from_code("11n"), WeatherIcon::Thunderstorm);
        assert_eq!(WeatherIcon::from_code("13d"), WeatherIcon::Snow);
        assert_eq!(WeatherIcon::from_code("50d"), WeatherIcon::Mist);
        assert_eq!(WeatherIcon::from_code(""), WeatherIcon::Sunny);
    }

    #[test]
    fn weather_icon_has_precipitation() {
        assert!(WeatherIcon::Rainy.has_precipitation());
        assert!(WeatherIcon::Thunderstorm.has_precipitation());
        assert!(!WeatherIcon::Sunny.has_precipitation());
        assert!(!WeatherIcon::Cloudy.has_precipitation());
    }

    #[test]
    fn date_from_timestamp_is_utc() {
        // 2024-06-01 23:30:00 UTC
        assert_eq!(
            ForecastSample::date_from_timestamp(1_717_284_600).as_deref(),
            Some("2024-06-01")
        );
    }

    #[test]
    fn display_description_capitalises() {
        let weather = CurrentWeather {
            temp: 30.0,
            feels_like: 32.0,
            humidity: 60.0,
            pressure: 1008.0,
            wind_speed_kmh: 12.0,
            description: "light rain".into(),
            icon: "10d".into(),
            rainfall_mm: 0.4,
            visibility_km: 10.0,
            temp_min: 28.0,
            temp_max: 31.0,
        };
        assert_eq!(weather.display_description(), "Light rain");
    }
}
