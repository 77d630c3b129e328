//! Locale-keyed text lookup.
//!
//! Catalog records carry their bilingual text as [`Localized`] pairs; UI
//! strings are addressed by [`Msg`] and resolved with [`tr`] at render time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "hi" | "hindi" | "हिन्दी" => Some(Language::Hi),
            _ => None,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Hi]
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.native_name())
    }
}

/// A piece of static text in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub hi: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Hi => self.hi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    Dashboard,
    Weather,
    Temperature,
    Humidity,
    Rainfall,
    WindSpeed,
    FeelsLike,
    Pressure,
    Visibility,
    SoilInfo,
    SoilType,
    CropsGrown,
    IrrigationType,
    Forecast,
    CropRecommendations,
    BasedOnConditions,
    RecommendedCrops,
    Season,
    WaterNeeds,
    ExpectedYield,
    NoData,
    CropCalendar,
    SowingPeriod,
    HarvestPeriod,
    GovSchemes,
    Benefits,
    Eligibility,
    Community,
    NoMessages,
    TypeMessage,
    Send,
    Language,
    SelectLanguage,
    DetectingLocation,
    LocationDenied,
    Retry,
    Refresh,
    Quit,
    LastUpdated,
    Never,
}

fn text(msg: Msg) -> Localized {
    match msg {
        Msg::Dashboard => Localized::new("Dashboard", "डैशबोर्ड"),
        Msg::Weather => Localized::new("Weather", "मौसम"),
        Msg::Temperature => Localized::new("Temperature", "तापमान"),
        Msg::Humidity => Localized::new("Humidity", "नमी"),
        Msg::Rainfall => Localized::new("Rainfall", "वर्षा"),
        Msg::WindSpeed => Localized::new("Wind Speed", "हवा की गति"),
        Msg::FeelsLike => Localized::new("Feels like", "महसूस होता है"),
        Msg::Pressure => Localized::new("Pressure", "दबाव"),
        Msg::Visibility => Localized::new("Visibility", "दृश्यता"),
        Msg::SoilInfo => Localized::new("Soil Information", "मिट्टी की जानकारी"),
        Msg::SoilType => Localized::new("Soil Type", "मिट्टी का प्रकार"),
        Msg::CropsGrown => Localized::new("Crops Grown", "उगाई जाने वाली फसलें"),
        Msg::IrrigationType => Localized::new("Irrigation", "सिंचाई का प्रकार"),
        Msg::Forecast => Localized::new("7-Day Forecast", "7 दिन का पूर्वानुमान"),
        Msg::CropRecommendations => Localized::new("Crop Recommendations", "फसल सिफारिशें"),
        Msg::BasedOnConditions => Localized::new(
            "Based on your current conditions",
            "आपकी वर्तमान स्थितियों के आधार पर",
        ),
        Msg::RecommendedCrops => Localized::new("Recommended Crops", "अनुशंसित फसलें"),
        Msg::Season => Localized::new("Season", "ऋतु"),
        Msg::WaterNeeds => Localized::new("Water Needs", "पानी की आवश्यकता"),
        Msg::ExpectedYield => Localized::new("Expected Yield", "अपेक्षित उपज"),
        Msg::NoData => Localized::new("No data available", "कोई डेटा उपलब्ध नहीं"),
        Msg::CropCalendar => Localized::new("Crop Calendar", "फसल कैलेंडर"),
        Msg::SowingPeriod => Localized::new("Sowing", "बुवाई"),
        Msg::HarvestPeriod => Localized::new("Harvest", "कटाई"),
        Msg::GovSchemes => Localized::new("Government Schemes", "सरकारी योजनाएं"),
        Msg::Benefits => Localized::new("Benefits", "लाभ"),
        Msg::Eligibility => Localized::new("Eligibility", "पात्रता"),
        Msg::Community => Localized::new("Farmer Community", "किसान समुदाय"),
        Msg::NoMessages => Localized::new("No messages yet", "अभी तक कोई संदेश नहीं"),
        Msg::TypeMessage => Localized::new("Type your message...", "अपना संदेश लिखें..."),
        Msg::Send => Localized::new("Send", "भेजें"),
        Msg::Language => Localized::new("Language", "भाषा"),
        Msg::SelectLanguage => Localized::new("Select Your Language", "अपनी भाषा चुनें"),
        Msg::DetectingLocation => Localized::new(
            "Detecting your location...",
            "आपका स्थान पता किया जा रहा है...",
        ),
        Msg::LocationDenied => Localized::new(
            "Location or weather data is unavailable",
            "स्थान या मौसम की जानकारी उपलब्ध नहीं है",
        ),
        Msg::Retry => Localized::new("Retry", "पुनः प्रयास करें"),
        Msg::Refresh => Localized::new("Refresh", "रीफ्रेश"),
        Msg::Quit => Localized::new("Quit", "बाहर"),
        Msg::LastUpdated => Localized::new("Last updated", "अंतिम अपडेट"),
        Msg::Never => Localized::new("Never", "कभी नहीं"),
    }
}

/// Resolve a UI string for the given language.
pub fn tr(lang: Language, msg: Msg) -> &'static str {
    text(msg).get(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_from_code() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("HI"), Some(Language::Hi));
        assert_eq!(Language::from_code(" hindi "), Some(Language::Hi));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn language_code_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn toggle_switches_between_languages() {
        assert_eq!(Language::En.toggle(), Language::Hi);
        assert_eq!(Language::Hi.toggle(), Language::En);
    }

    #[test]
    fn tr_resolves_by_language() {
        assert_eq!(tr(Language::En, Msg::Rainfall), "Rainfall");
        assert_eq!(tr(Language::Hi, Msg::Rainfall), "वर्षा");
    }

    #[test]
    fn every_message_has_both_languages() {
        let all = [
            Msg::Dashboard,
            Msg::Weather,
            Msg::Temperature,
            Msg::Humidity,
            Msg::Rainfall,
            Msg::WindSpeed,
            Msg::FeelsLike,
            Msg::Pressure,
            Msg::Visibility,
            Msg::SoilInfo,
            Msg::SoilType,
            Msg::CropsGrown,
            Msg::IrrigationType,
            Msg::Forecast,
            Msg::CropRecommendations,
            Msg::BasedOnConditions,
            Msg::RecommendedCrops,
            Msg::Season,
            Msg::WaterNeeds,
            Msg::ExpectedYield,
            Msg::NoData,
            Msg::CropCalendar,
            Msg::SowingPeriod,
            Msg::HarvestPeriod,
            Msg::GovSchemes,
            Msg::Benefits,
            Msg::Eligibility,
            Msg::Community,
            Msg::NoMessages,
            Msg::TypeMessage,
            Msg::Send,
            Msg::Language,
            Msg::SelectLanguage,
            Msg::DetectingLocation,
            Msg::LocationDenied,
            Msg::Retry,
            Msg::Refresh,
            Msg::Quit,
            Msg::LastUpdated,
            Msg::Never,
        ];
        for msg in all {
            assert!(!tr(Language::En, msg).is_empty(), "{:?}", msg);
            assert!(!tr(Language::Hi, msg).is_empty(), "{:?}", msg);
        }
    }
}
