use crate::i18n::Localized;
use crate::models::{CalendarCrop, CropSeason};

pub static CROP_CALENDAR: &[CropSeason] = &[
    CropSeason {
        name: Localized::new("Kharif (Monsoon)", "खरीफ (मानसून)"),
        months: Localized::new("June - October", "जून - अक्टूबर"),
        crops: &[
            CalendarCrop {
                name: Localized::new("Rice", "धान"),
                sowing: Localized::new("June - July", "जून - जुलाई"),
                harvest: Localized::new("October - November", "अक्टूबर - नवंबर"),
                icon: "🌾",
            },
            CalendarCrop {
                name: Localized::new("Maize", "मक्का"),
                sowing: Localized::new("June - July", "जून - जुलाई"),
                harvest: Localized::new("September - October", "सितंबर - अक्टूबर"),
                icon: "🌽",
            },
            CalendarCrop {
                name: Localized::new("Cotton", "कपास"),
                sowing: Localized::new("April - May", "अप्रैल - मई"),
                harvest: Localized::new("October - December", "अक्टूबर - दिसंबर"),
                icon: "☁",
            },
            CalendarCrop {
                name: Localized::new("Soybean", "सोयाबीन"),
                sowing: Localized::new("June - July", "जून - जुलाई"),
                harvest: Localized::new("September - October", "सितंबर - अक्टूबर"),
                icon: "🫘",
            },
        ],
    },
    CropSeason {
        name: Localized::new("Rabi (Winter)", "रबी (सर्दी)"),
        months: Localized::new("October - March", "अक्टूबर - मार्च"),
        crops: &[
            CalendarCrop {
                name: Localized::new("Wheat", "गेहूं"),
                sowing: Localized::new("October - December", "अक्टूबर - दिसंबर"),
                harvest: Localized::new("March - April", "मार्च - अप्रैल"),
                icon: "🌾",
            },
            CalendarCrop {
                name: Localized::new("Mustard", "सरसों"),
                sowing: Localized::new("October - November", "अक्टूबर - नवंबर"),
                harvest: Localized::new("February - March", "फरवरी - मार्च"),
                icon: "🌼",
            },
            CalendarCrop {
                name: Localized::new("Gram (Chickpea)", "चना"),
                sowing: Localized::new("October - November", "अक्टूबर - नवंबर"),
                harvest: Localized::new("February - March", "फरवरी - मार्च"),
                icon: "🫛",
            },
            CalendarCrop {
                name: Localized::new("Barley", "जौ"),
                sowing: Localized::new("October - November", "अक्टूबर - नवंबर"),
                harvest: Localized::new("March - April", "मार्च - अप्रैल"),
                icon: "🌾",
            },
        ],
    },
    CropSeason {
        name: Localized::new("Zaid (Summer)", "ज़ायद (गर्मी)"),
        months: Localized::new("March - June", "मार्च - जून"),
        crops: &[
            CalendarCrop {
                name: Localized::new("Watermelon", "तरबूज"),
                sowing: Localized::new("February - March", "फरवरी - मार्च"),
                harvest: Localized::new("April - May", "अप्रैल - मई"),
                icon: "🍉",
            },
            CalendarCrop {
                name: Localized::new("Cucumber", "खीरा"),
                sowing: Localized::new("February - March", "फरवरी - मार्च"),
                harvest: Localized::new("April - June", "अप्रैल - जून"),
                icon: "🥒",
            },
            CalendarCrop {
                name: Localized::new("Moong (Green Gram)", "मूंग"),
                sowing: Localized::new("March - April", "मार्च - अप्रैल"),
                harvest: Localized::new("May - June", "मई - जून"),
                icon: "🫛",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_seasons_each_with_crops() {
        assert_eq!(CROP_CALENDAR.len(), 3);
        for season in CROP_CALENDAR {
            assert!(!season.crops.is_empty(), "{}", season.name.en);
        }
        assert_eq!(CROP_CALENDAR[0].name.en, "Kharif (Monsoon)");
    }
}
