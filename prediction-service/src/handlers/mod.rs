pub mod catalog;
pub mod health;
pub mod predict;

pub use catalog::{companies, fuel_types, models_for_company, years};
pub use health::{health_check, metrics_endpoint};
pub use predict::predict;
