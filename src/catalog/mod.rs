//! Read-only reference tables, loaded with the binary and never mutated.

pub mod calendar;
pub mod crops;
pub mod schemes;
pub mod soil;

pub use calendar::CROP_CALENDAR;
pub use crops::CROPS;
pub use schemes::SCHEMES;
