pub mod core_api;
pub mod dataset;
pub mod metrics;
pub mod save;
