pub mod dataset;
pub mod metrics;
pub mod model;

pub use dataset::CarDataset;
pub use metrics::{get_metrics, init_metrics};
pub use model::PriceModel;
