use crate::catalog::CROPS;
use crate::models::{CropRecord, CurrentWeather, SoilProfile};

pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;
pub const DEFAULT_RAINFALL_MM: f64 = 50.0;
pub const DEFAULT_SOIL_TYPE: &str = "Alluvial Soil";

/// Growing conditions fed to [`recommend`]
#[derive(Debug, Clone, PartialEq)]
pub struct GrowingConditions {
    pub temperature: f64,
    pub rainfall: f64,
    pub soil_type: String,
}

impl Default for GrowingConditions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE_C,
            rainfall: DEFAULT_RAINFALL_MM,
            soil_type: DEFAULT_SOIL_TYPE.to_string(),
        }
    }
}

impl GrowingConditions {
    /// Build conditions from live data. A missing or zero reading falls back
    /// to the default for that field.
    pub fn observed(weather: Option<&CurrentWeather>, soil: Option<&SoilProfile>) -> Self {
        let non_zero = |v: f64| (v != 0.0).then_some(v);
        Self {
            temperature: weather
                .and_then(|w| non_zero(w.temp))
                .unwrap_or(DEFAULT_TEMPERATURE_C),
            rainfall: weather
                .and_then(|w| non_zero(w.rainfall_mm))
                .unwrap_or(DEFAULT_RAINFALL_MM),
            // Catalog soil labels are English
            soil_type: soil
                .map(|s| s.soil_type.en)
                .unwrap_or(DEFAULT_SOIL_TYPE)
                .to_string(),
        }
    }

    pub fn recommend(&self) -> Vec<&'static CropRecord> {
        recommend(self.temperature, self.rainfall, &self.soil_type)
    }
}

/// Every catalog crop whose temperature and rainfall ranges (inclusive)
/// cover the inputs and which grows in `soil_type`, in catalog order.
pub fn recommend(temperature: f64, rainfall: f64, soil_type: &str) -> Vec<&'static CropRecord> {
    let crops: Vec<&'static CropRecord> = CROPS
        .iter()
        .filter(|crop| crop.suits(temperature, rainfall, soil_type))
        .collect();

    tracing::debug!(
        temperature,
        rainfall,
        soil_type,
        matches = crops.len(),
        "Evaluated crop recommendations"
    );

    crops
}
