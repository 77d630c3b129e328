pub mod calculations;
pub mod crops;
pub mod data_sync;
pub mod forecast;

pub use crops::GrowingConditions;
pub use data_sync::DataSyncService;
