pub mod car;

pub use car::{CarRecord, FeatureRecord};
