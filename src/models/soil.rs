use crate::i18n::Localized;

/// Agronomic reference data for a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoilProfile {
    pub soil_type: Localized,
    pub major_crops: Localized,
    pub irrigation: Localized,
}
