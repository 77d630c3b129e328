use crate::i18n::Localized;
use std::ops::RangeInclusive;

/// Static catalog entry describing where a crop does well
#[derive(Debug, Clone, PartialEq)]
pub struct CropRecord {
    pub name: Localized,
    pub temp_range: RangeInclusive<f64>,     // °C
    pub rainfall_range: RangeInclusive<f64>, // mm
    pub soils: &'static [&'static str],
    pub season: Localized,
    pub water_needs: Localized,
    pub expected_yield: Localized,
    pub icon: &'static str,
}

impl CropRecord {
    /// Case-sensitive partial match: "Alluvial Soil" matches the label "Alluvial".
    pub fn grows_in(&self, soil_type: &str) -> bool {
        self.soils.iter().any(|label| soil_type.contains(label))
    }

    pub fn suits(&self, temperature: f64, rainfall: f64, soil_type: &str) -> bool {
        self.temp_range.contains(&temperature)
            && self.rainfall_range.contains(&rainfall)
            && self.grows_in(soil_type)
    }
}
