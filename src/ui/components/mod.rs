pub mod gauge;
pub mod input;
pub mod nav;

pub use gauge::{humidity_gauge, rainfall_gauge, temperature_gauge, wind_gauge};
pub use input::InputWidget;
pub use nav::nav_bar;
