pub mod calendar;
pub mod community;
pub mod crop;
pub mod forecast;
pub mod place;
pub mod scheme;
pub mod soil;

pub use calendar::*;
pub use community::*;
pub use crop::*;
pub use forecast::*;
pub use place::*;
pub use scheme::*;
pub use soil::*;
