pub mod calendar;
pub mod community;
pub mod dashboard;
pub mod language;
pub mod recommendations;
pub mod schemes;

pub use calendar::CalendarScreen;
pub use community::CommunityScreen;
pub use dashboard::DashboardScreen;
pub use language::LanguageScreen;
pub use recommendations::RecommendationsScreen;
pub use schemes::SchemesScreen;
