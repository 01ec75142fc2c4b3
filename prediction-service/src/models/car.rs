use serde::{Deserialize, Serialize};

/// One row of model input.
///
/// The column order `[name, company, year, kms_driven, fuel_type]` is a
/// contract with the trained artifact and must never change without
/// retraining.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub name: String,
    pub company: String,
    pub year: i64,
    pub kms_driven: i64,
    pub fuel_type: String,
}

/// One row of the cleaned car listings CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct CarRecord {
    pub name: String,
    pub company: String,
    pub year: i64,
    #[serde(rename = "Price")]
    pub price: i64,
    pub kms_driven: i64,
    pub fuel_type: String,
}
