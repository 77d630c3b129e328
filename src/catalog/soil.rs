use crate::i18n::Localized;
use crate::models::SoilProfile;

pub static ALLUVIAL: SoilProfile = SoilProfile {
    soil_type: Localized::new("Alluvial Soil", "जलोढ़ मिट्टी"),
    major_crops: Localized::new(
        "Rice, Wheat, Sugarcane, Pulses",
        "धान, गेहूं, गन्ना, दालें",
    ),
    irrigation: Localized::new("Canal & Tube well", "नहर और ट्यूबवेल"),
};

pub static BLACK: SoilProfile = SoilProfile {
    soil_type: Localized::new("Black Soil", "काली मिट्टी"),
    major_crops: Localized::new(
        "Cotton, Soybean, Jowar, Groundnut",
        "कपास, सोयाबीन, ज्वार, मूंगफली",
    ),
    irrigation: Localized::new("Drip & Well", "ड्रिप और कुआं"),
};

pub static RED: SoilProfile = SoilProfile {
    soil_type: Localized::new("Red Soil", "लाल मिट्टी"),
    major_crops: Localized::new(
        "Millets, Groundnut, Pulses, Rice",
        "मोटे अनाज, मूंगफली, दालें, धान",
    ),
    irrigation: Localized::new("Tank & Well", "तालाब और कुआं"),
};

pub static LATERITE: SoilProfile = SoilProfile {
    soil_type: Localized::new("Laterite Soil", "लेटराइट मिट्टी"),
    major_crops: Localized::new(
        "Tea, Coffee, Coconut, Cashew",
        "चाय, कॉफी, नारियल, काजू",
    ),
    irrigation: Localized::new("Rain-fed & Sprinkler", "वर्षा आधारित और स्प्रिंकलर"),
};

pub static DESERT: SoilProfile = SoilProfile {
    soil_type: Localized::new("Desert Soil", "मरुस्थलीय मिट्टी"),
    major_crops: Localized::new(
        "Bajra, Guar, Moth bean, Mustard",
        "बाजरा, ग्वार, मोठ, सरसों",
    ),
    irrigation: Localized::new("Drip & Sprinkler", "ड्रिप और स्प्रिंकलर"),
};

pub static MOUNTAIN: SoilProfile = SoilProfile {
    soil_type: Localized::new("Mountain Soil", "पर्वतीय मिट्टी"),
    major_crops: Localized::new("Apple, Maize, Potato, Tea", "सेब, मक्का, आलू, चाय"),
    irrigation: Localized::new(
        "Rain-fed & Terrace channels",
        "वर्षा आधारित और सीढ़ीदार नालियां",
    ),
};

/// Region (state) name as returned by the reverse geocoder
static REGIONS: &[(&str, &SoilProfile)] = &[
    ("Punjab", &ALLUVIAL),
    ("Haryana", &ALLUVIAL),
    ("Uttar Pradesh", &ALLUVIAL),
    ("Bihar", &ALLUVIAL),
    ("West Bengal", &ALLUVIAL),
    ("Assam", &ALLUVIAL),
    ("Delhi", &ALLUVIAL),
    ("Maharashtra", &BLACK),
    ("Gujarat", &BLACK),
    ("Madhya Pradesh", &BLACK),
    ("Tamil Nadu", &RED),
    ("Karnataka", &RED),
    ("Andhra Pradesh", &RED),
    ("Telangana", &RED),
    ("Odisha", &RED),
    ("Chhattisgarh", &RED),
    ("Jharkhand", &RED),
    ("Kerala", &LATERITE),
    ("Goa", &LATERITE),
    ("Meghalaya", &LATERITE),
    ("Rajasthan", &DESERT),
    ("Himachal Pradesh", &MOUNTAIN),
    ("Uttarakhand", &MOUNTAIN),
    ("Jammu and Kashmir", &MOUNTAIN),
    ("Sikkim", &MOUNTAIN),
];

/// Soil profile for a region; unknown regions get the alluvial default.
pub fn lookup(region: &str) -> &'static SoilProfile {
    REGIONS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, profile)| *profile)
        .unwrap_or_else(|| {
            tracing::debug!(region, "No soil profile for region, using default");
            &ALLUVIAL
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_region() {
        assert_eq!(lookup("Maharashtra").soil_type.en, "Black Soil");
        assert_eq!(lookup("Kerala").soil_type.en, "Laterite Soil");
        assert_eq!(lookup("Rajasthan").soil_type.hi, "मरुस्थलीय मिट्टी");
    }

    #[test]
    fn lookup_unknown_region_falls_back_to_alluvial() {
        assert_eq!(lookup("Unknown Region"), &ALLUVIAL);
        assert_eq!(lookup("Unknown").soil_type.en, "Alluvial Soil");
        assert_eq!(lookup("").soil_type.en, "Alluvial Soil");
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(lookup("maharashtra"), &ALLUVIAL);
        assert_eq!(lookup("Maharashtra "), &ALLUVIAL);
    }

    #[test]
    fn region_names_are_unique() {
        let mut names: Vec<&str> = REGIONS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REGIONS.len());
    }
}
