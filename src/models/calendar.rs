use crate::i18n::Localized;

/// A crop's sowing and harvest window within a season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCrop {
    pub name: Localized,
    pub sowing: Localized,
    pub harvest: Localized,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSeason {
    pub name: Localized,
    pub months: Localized,
    pub crops: &'static [CalendarCrop],
}
