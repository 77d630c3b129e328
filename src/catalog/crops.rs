use crate::i18n::Localized;
use crate::models::CropRecord;

const KHARIF: Localized = Localized::new("Kharif", "खरीफ");
const RABI: Localized = Localized::new("Rabi", "रबी");
const ZAID: Localized = Localized::new("Zaid", "ज़ायद");
const PERENNIAL: Localized = Localized::new("Perennial", "बारहमासी");

const WATER_LOW: Localized = Localized::new("Low", "कम");
const WATER_MEDIUM: Localized = Localized::new("Medium", "मध्यम");
const WATER_HIGH: Localized = Localized::new("High", "अधिक");

/// Crop catalog in display order. Recommendation output preserves this order.
pub static CROPS: &[CropRecord] = &[
    CropRecord {
        name: Localized::new("Rice", "धान"),
        temp_range: 20.0..=35.0,
        rainfall_range: 100.0..=300.0,
        soils: &["Alluvial", "Clay", "Laterite"],
        season: KHARIF,
        water_needs: WATER_HIGH,
        expected_yield: Localized::new("20-25 quintal/acre", "20-25 क्विंटल/एकड़"),
        icon: "🌾",
    },
    CropRecord {
        name: Localized::new("Wheat", "गेहूं"),
        temp_range: 10.0..=25.0,
        rainfall_range: 50.0..=100.0,
        soils: &["Alluvial", "Loamy", "Black"],
        season: RABI,
        water_needs: WATER_MEDIUM,
        expected_yield: Localized::new("18-22 quintal/acre", "18-22 क्विंटल/एकड़"),
        icon: "🌾",
    },
    CropRecord {
        name: Localized::new("Maize", "मक्का"),
        temp_range: 18.0..=32.0,
        rainfall_range: 50.0..=100.0,
        soils: &["Alluvial", "Red", "Loamy", "Mountain"],
        season: KHARIF,
        water_needs: WATER_MEDIUM,
        expected_yield: Localized::new("15-20 quintal/acre", "15-20 क्विंटल/एकड़"),
        icon: "🌽",
    },
    CropRecord {
        name: Localized::new("Cotton", "कपास"),
        temp_range: 21.0..=35.0,
        rainfall_range: 50.0..=100.0,
        soils: &["Black", "Alluvial"],
        season: KHARIF,
        water_needs: WATER_MEDIUM,
        expected_yield: Localized::new("8-10 quintal/acre", "8-10 क्विंटल/एकड़"),
        icon: "☁",
    },
    CropRecord {
        name: Localized::new("Sugarcane", "गन्ना"),
        temp_range: 20.0..=35.0,
        rainfall_range: 75.0..=150.0,
        soils: &["Alluvial", "Black", "Loamy"],
        season: PERENNIAL,
        water_needs: WATER_HIGH,
        expected_yield: Localized::new("300-400 quintal/acre", "300-400 क्विंटल/एकड़"),
        icon: "🎋",
    },
    CropRecord {
        name: Localized::new("Soybean", "सोयाबीन"),
        temp_range: 20.0..=32.0,
        rainfall_range: 60.0..=150.0,
        soils: &["Black", "Red"],
        season: KHARIF,
        water_needs: WATER_MEDIUM,
        expected_yield: Localized::new("8-12 quintal/acre", "8-12 क्विंटल/एकड़"),
        icon: "🫘",
    },
    CropRecord {
        name: Localized::new("Groundnut", "मूंगफली"),
        temp_range: 22.0..=35.0,
        rainfall_range: 50.0..=125.0,
        soils: &["Red", "Sandy", "Black"],
        season: KHARIF,
        water_needs: WATER_LOW,
        expected_yield: Localized::new("8-10 quintal/acre", "8-10 क्विंटल/एकड़"),
        icon: "🥜",
    },
    CropRecord {
        name: Localized::new("Gram (Chickpea)", "चना"),
        temp_range: 15.0..=30.0,
        rainfall_range: 0.0..=60.0,
        soils: &["Alluvial", "Black", "Sandy"],
        season: RABI,
        water_needs: WATER_LOW,
        expected_yield: Localized::new("6-8 quintal/acre", "6-8 क्विंटल/एकड़"),
        icon: "🫛",
    },
    CropRecord {
        name: Localized::new("Mustard", "सरसों"),
        temp_range: 10.0..=25.0,
        rainfall_range: 25.0..=50.0,
        soils: &["Alluvial", "Sandy", "Loamy", "Desert"],
        season: RABI,
        water_needs: WATER_LOW,
        expected_yield: Localized::new("6-8 quintal/acre", "6-8 क्विंटल/एकड़"),
        icon: "🌼",
    },
    CropRecord {
        name: Localized::new("Pearl Millet (Bajra)", "बाजरा"),
        temp_range: 25.0..=38.0,
        rainfall_range: 0.0..=60.0,
        soils: &["Sandy", "Desert", "Red", "Alluvial"],
        season: KHARIF,
        water_needs: WATER_LOW,
        expected_yield: Localized::new("8-10 quintal/acre", "8-10 क्विंटल/एकड़"),
        icon: "🌾",
    },
    CropRecord {
        name: Localized::new("Tea", "चाय"),
        temp_range: 13.0..=30.0,
        rainfall_range: 150.0..=300.0,
        soils: &["Laterite", "Mountain"],
        season: PERENNIAL,
        water_needs: WATER_HIGH,
        expected_yield: Localized::new("8-10 quintal/acre", "8-10 क्विंटल/एकड़"),
        icon: "🍃",
    },
    CropRecord {
        name: Localized::new("Vegetables", "सब्जियां"),
        temp_range: 15.0..=35.0,
        rainfall_range: 0.0..=100.0,
        soils: &["Alluvial", "Loamy", "Red", "Black"],
        season: ZAID,
        water_needs: WATER_MEDIUM,
        expected_yield: Localized::new("40-80 quintal/acre", "40-80 क्विंटल/एकड़"),
        icon: "🥬",
    },
    CropRecord {
        name: Localized::new("Watermelon", "तरबूज"),
        temp_range: 24.0..=40.0,
        rainfall_range: 0.0..=50.0,
        soils: &["Sandy", "Alluvial", "Desert"],
        season: ZAID,
        water_needs: WATER_MEDIUM,
        expected_yield: Localized::new("100-150 quintal/acre", "100-150 क्विंटल/एकड़"),
        icon: "🍉",
    },
];
