use crate::catalog::{soil, CROP_CALENDAR, SCHEMES};
use crate::config::Config;
use crate::db::Database;
use crate::error::{FarmGptError, Result};
use crate::i18n::{tr, Language, Msg};
use crate::logic::GrowingConditions;
use crate::models::{
    default_author, CommunityMessage, CropRecord, CurrentWeather, DailySummary, Place,
    SoilProfile, WeatherSnapshot,
};
use chrono::{DateTime, Utc};

const MESSAGE_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Recommendations,
    Calendar,
    Schemes,
    Community,
    Language,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Dashboard),
            '2' => Some(Screen::Recommendations),
            '3' => Some(Screen::Calendar),
            '4' => Some(Screen::Schemes),
            '5' => Some(Screen::Community),
            'l' | 'L' => Some(Screen::Language),
            _ => None,
        }
    }
}

/// Where the dashboard data stands
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    /// No data at all and the last refresh failed
    LocationError(String),
}

/// Cursor over a fixed-length list
#[derive(Debug, Default)]
pub struct SelectionState {
    pub selected_index: usize,
}

impl SelectionState {
    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn clamp(&mut self, max: usize) {
        self.selected_index = self.selected_index.min(max.saturating_sub(1));
    }
}

#[derive(Debug, Default)]
pub struct CommunityState {
    pub composing: bool,
    pub input: String,
    pub selection: SelectionState,
}

impl CommunityState {
    pub fn start_composing(&mut self) {
        self.composing = true;
    }

    pub fn cancel_composing(&mut self) {
        self.composing = false;
        self.input.clear();
    }

    pub fn take_input(&mut self) -> String {
        self.composing = false;
        std::mem::take(&mut self.input)
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,
    pub db: Database,
    pub language: Language,

    // Data
    pub place: Option<Place>,
    pub soil: Option<&'static SoilProfile>,
    pub weather: Option<CurrentWeather>,
    pub forecast: Vec<DailySummary>,
    pub conditions: GrowingConditions,
    pub recommendations: Vec<&'static CropRecord>,
    pub last_updated: Option<DateTime<Utc>>,
    pub messages: Vec<CommunityMessage>,
    pub load_state: LoadState,

    // Screen states
    pub recommendations_state: SelectionState,
    pub calendar_state: SelectionState,
    pub schemes_state: SelectionState,
    pub language_state: SelectionState,
    pub community_state: CommunityState,

    // UI state
    pub status_message: Option<String>,
    pub needs_refresh: bool,
}

impl App {
    pub fn new(config: Config, db: Database) -> Result<Self> {
        let language = db.get_language()?.unwrap_or(config.farm.language);
        let messages = db.list_community_messages(MESSAGE_LIMIT)?;
        let language_index = Language::all()
            .iter()
            .position(|l| *l == language)
            .unwrap_or(0);

        let mut app = Self {
            screen: Screen::Dashboard,
            should_quit: false,
            config,
            db,
            language,
            place: None,
            soil: None,
            weather: None,
            forecast: Vec::new(),
            conditions: GrowingConditions::default(),
            recommendations: Vec::new(),
            last_updated: None,
            messages,
            load_state: LoadState::Loading,
            recommendations_state: SelectionState::default(),
            calendar_state: SelectionState::default(),
            schemes_state: SelectionState::default(),
            language_state: SelectionState {
                selected_index: language_index,
            },
            community_state: CommunityState::default(),
            status_message: None,
            needs_refresh: false,
        };

        if let Some(snapshot) = app.db.load_snapshot()? {
            tracing::debug!(fetched_at = %snapshot.fetched_at, "Loaded cached weather");
            app.apply_snapshot(snapshot);
        }
        app.evaluate_recommendations();

        Ok(app)
    }

    pub fn t(&self, msg: Msg) -> &'static str {
        tr(self.language, msg)
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The location-error screen only replaces the dashboard when nothing was ever loaded
    pub fn has_data(&self) -> bool {
        self.weather.is_some()
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        if !self.has_data() {
            self.load_state = LoadState::Loading;
        }
        self.set_status(self.t(Msg::DetectingLocation));
    }

    pub fn apply_snapshot(&mut self, snapshot: WeatherSnapshot) {
        self.soil = Some(soil::lookup(&snapshot.place.state));
        self.place = Some(snapshot.place);
        self.weather = snapshot.weather;
        self.forecast = snapshot.forecast;
        self.last_updated = Some(snapshot.fetched_at);
        self.load_state = LoadState::Ready;
        self.evaluate_recommendations();
    }

    pub fn refresh_failed(&mut self, error: &FarmGptError) {
        tracing::warn!("Refresh failed: {}", error);
        if self.has_data() {
            self.load_state = LoadState::Ready;
            self.set_status(&format!("Refresh failed: {}", error));
        } else {
            self.load_state = LoadState::LocationError(error.to_string());
            self.clear_status();
        }
    }

    pub fn evaluate_recommendations(&mut self) {
        self.conditions = GrowingConditions::observed(self.weather.as_ref(), self.soil);
        self.recommendations = self.conditions.recommend();
        self.recommendations_state.clamp(self.recommendations.len());
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.db.set_language(language)?;
        self.language = language;
        self.set_status(language.native_name());
        Ok(())
    }

    pub fn select_highlighted_language(&mut self) -> Result<()> {
        let language = Language::all()
            .get(self.language_state.selected_index)
            .copied()
            .unwrap_or_default();
        self.set_language(language)
    }

    pub fn season_count(&self) -> usize {
        CROP_CALENDAR.len()
    }

    pub fn scheme_count(&self) -> usize {
        SCHEMES.len()
    }

    fn author(&self) -> String {
        match &self.config.farm.farmer_name {
            Some(name) => name.clone(),
            None => {
                let seed = Utc::now().timestamp_subsec_nanos();
                default_author(self.language, seed).to_string()
            }
        }
    }

    /// Post the composed message. Blank input is dropped.
    pub fn post_message(&mut self) -> Result<bool> {
        let text = self.community_state.take_input();
        let Some(message) = CommunityMessage::new(self.author(), &text) else {
            return Ok(false);
        };
        self.db.add_community_message(&message)?;
        self.reload_messages()?;
        Ok(true)
    }

    pub fn delete_selected_message(&mut self) -> Result<()> {
        let id = self
            .messages
            .get(self.community_state.selection.selected_index)
            .and_then(|m| m.id);
        if let Some(id) = id {
            self.db.delete_community_message(id)?;
            self.reload_messages()?;
        }
        Ok(())
    }

    fn reload_messages(&mut self) -> Result<()> {
        self.messages = self.db.list_community_messages(MESSAGE_LIMIT)?;
        self.community_state.selection.clamp(self.messages.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FarmConfig;

    fn app() -> App {
        App::new(Config::default(), Database::open_in_memory().unwrap()).unwrap()
    }

    fn snapshot(state: &str, temp: f64, rain: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            fetched_at: Utc::now(),
            place: Place {
                latitude: 19.07,
                longitude: 72.87,
                city: "Mumbai".into(),
                state: state.into(),
            },
            weather: Some(CurrentWeather {
                temp,
                feels_like: temp,
                humidity: 80.0,
                pressure: 1006.0,
                wind_speed_kmh: 14.0,
                description: "moderate rain".into(),
                icon: "10d".into(),
                rainfall_mm: rain,
                visibility_km: 6.0,
                temp_min: temp,
                temp_max: temp,
            }),
            forecast: Vec::new(),
        }
    }

    #[test]
    fn starts_loading_with_default_recommendations() {
        let app = app();
        assert_eq!(app.load_state, LoadState::Loading);
        assert!(!app.has_data());
        assert_eq!(app.recommendations.len(), 8);
        assert_eq!(app.language, Language::En);
    }

    #[test]
    fn snapshot_sets_soil_and_recommendations() {
        let mut app = app();
        app.apply_snapshot(snapshot("Maharashtra", 28.0, 80.0));

        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(app.soil.unwrap().soil_type.en, "Black Soil");
        let names: Vec<&str> = app.recommendations.iter().map(|c| c.name.en).collect();
        assert!(names.contains(&"Cotton"));
        assert!(names.contains(&"Soybean"));
        assert!(!names.contains(&"Rice"));
    }

    #[test]
    fn refresh_failure_without_data_shows_error() {
        let mut app = app();
        app.refresh_failed(&FarmGptError::LocationUnavailable("denied".into()));
        assert!(matches!(app.load_state, LoadState::LocationError(_)));

        app.request_refresh();
        assert_eq!(app.load_state, LoadState::Loading);
        assert!(app.needs_refresh);
    }

    #[test]
    fn refresh_failure_keeps_existing_data() {
        let mut app = app();
        app.apply_snapshot(snapshot("Punjab", 30.0, 150.0));
        app.refresh_failed(&FarmGptError::DataSourceUnavailable("timeout".into()));

        assert_eq!(app.load_state, LoadState::Ready);
        assert!(app.status_message.as_deref().unwrap().contains("Refresh failed"));
        assert_eq!(app.place.as_ref().unwrap().state, "Punjab");
    }

    #[test]
    fn cached_snapshot_is_loaded_at_startup() {
        let db = Database::open_in_memory().unwrap();
        db.save_snapshot(&snapshot("Kerala", 27.0, 200.0)).unwrap();

        let app = App::new(Config::default(), db).unwrap();
        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(app.soil.unwrap().soil_type.en, "Laterite Soil");
    }

    #[test]
    fn language_choice_is_persisted() {
        let db = Database::open_in_memory().unwrap();
        let mut app = App::new(Config::default(), db.clone()).unwrap();
        app.language_state.selected_index = 1;
        app.select_highlighted_language().unwrap();

        assert_eq!(app.language, Language::Hi);
        assert_eq!(app.t(Msg::Weather), "मौसम");
        assert_eq!(db.get_language().unwrap(), Some(Language::Hi));

        let reopened = App::new(Config::default(), db).unwrap();
        assert_eq!(reopened.language, Language::Hi);
    }

    #[test]
    fn posting_messages() {
        let config = Config {
            farm: FarmConfig {
                farmer_name: Some("Asha".into()),
                language: Language::En,
            },
            ..Config::default()
        };
        let mut app = App::new(config, Database::open_in_memory().unwrap()).unwrap();

        app.community_state.input = "   ".into();
        assert!(!app.post_message().unwrap());
        assert!(app.messages.is_empty());

        app.community_state.start_composing();
        app.community_state.input = "Wheat sowing done".into();
        assert!(app.post_message().unwrap());
        assert!(!app.community_state.composing);
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].author, "Asha");

        app.delete_selected_message().unwrap();
        assert!(app.messages.is_empty());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = SelectionState::default();
        state.prev();
        assert_eq!(state.selected_index, 0);
        state.next(2);
        state.next(2);
        assert_eq!(state.selected_index, 1);
        state.clamp(0);
        assert_eq!(state.selected_index, 0);
    }
}
