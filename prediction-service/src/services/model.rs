//! Loader and evaluator for the pre-trained price regression artifact.
//!
//! The artifact is JSON carrying an intercept, per-column numeric weights and
//! per-column categorical weight tables keyed by raw category strings. The
//! encoding contract is fixed by training and owned by the artifact; this
//! module only applies it, it never derives one.

use crate::models::FeatureRecord;
use anyhow::Context;
use serde::Deserialize;
use service_core::error::AppError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    intercept: f64,
    numeric: NumericWeights,
    categorical: CategoricalWeights,
}

#[derive(Debug, Deserialize)]
struct NumericWeights {
    year: f64,
    kms_driven: f64,
}

#[derive(Debug, Deserialize)]
struct CategoricalWeights {
    name: HashMap<String, f64>,
    company: HashMap<String, f64>,
    fuel_type: HashMap<String, f64>,
}

/// The loaded regression model. Immutable after load, shared read-only
/// across all requests.
pub struct PriceModel {
    artifact: ModelArtifact,
}

impl PriceModel {
    /// Read and deserialize the model artifact. A missing or corrupt file is
    /// a startup failure; there is no reload mechanism.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            AppError::ModelError(anyhow::anyhow!(
                "Failed to read model artifact at {}: {}",
                path.display(),
                e
            ))
        })?;

        let artifact: ModelArtifact = serde_json::from_slice(&bytes)
            .context("Failed to deserialize model artifact")
            .map_err(AppError::ModelError)?;

        Ok(Self { artifact })
    }

    /// Evaluate the artifact against one feature record.
    ///
    /// Columns are applied in the trained order: name, company, year,
    /// kms_driven, fuel_type. A category absent from the artifact's tables
    /// contributes zero, matching one-hot unknown-handling at training time.
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, AppError> {
        let mut price = self.artifact.intercept;
        price += lookup(&self.artifact.categorical.name, &record.name);
        price += lookup(&self.artifact.categorical.company, &record.company);
        price += self.artifact.numeric.year * record.year as f64;
        price += self.artifact.numeric.kms_driven * record.kms_driven as f64;
        price += lookup(&self.artifact.categorical.fuel_type, &record.fuel_type);

        if !price.is_finite() {
            return Err(AppError::InferenceError(anyhow::anyhow!(
                "Model produced a non-finite prediction for record {:?}",
                record
            )));
        }

        Ok(price)
    }
}

fn lookup(table: &HashMap<String, f64>, category: &str) -> f64 {
    table.get(category).copied().unwrap_or(0.0)
}

/// Round to two decimal places, the precision of the response body.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ModelArtifact {
        serde_json::from_value(serde_json::json!({
            "intercept": -1000000.0,
            "numeric": { "year": 500.0, "kms_driven": -0.5 },
            "categorical": {
                "name": { "Swift": 150000.0 },
                "company": { "Maruti": 50000.0 },
                "fuel_type": { "Petrol": 10000.0 }
            }
        }))
        .unwrap()
    }

    fn record() -> FeatureRecord {
        FeatureRecord {
            name: "Swift".to_string(),
            company: "Maruti".to_string(),
            year: 2015,
            kms_driven: 30000,
            fuel_type: "Petrol".to_string(),
        }
    }

    #[test]
    fn predicts_linear_combination() {
        let model = PriceModel {
            artifact: artifact(),
        };
        let price = model.predict(&record()).unwrap();
        assert_eq!(price, 202500.0);
    }

    #[test]
    fn unknown_category_contributes_zero() {
        let model = PriceModel {
            artifact: artifact(),
        };
        let mut rec = record();
        rec.company = "Unknown Motors".to_string();
        let price = model.predict(&rec).unwrap();
        assert_eq!(price, 152500.0);
    }

    #[test]
    fn identical_input_is_deterministic() {
        let model = PriceModel {
            artifact: artifact(),
        };
        let a = model.predict(&record()).unwrap();
        let b = model.predict(&record()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(350000.125), 350000.13);
        assert_eq!(round2(202500.0), 202500.0);
    }

    #[test]
    fn corrupt_artifact_fails_load() {
        let dir = std::env::temp_dir().join("price-model-corrupt-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("artifact.json");
        std::fs::write(&path, b"not json").unwrap();
        assert!(PriceModel::load(&path).is_err());
    }

    #[test]
    fn missing_artifact_fails_load() {
        assert!(PriceModel::load("does/not/exist.json").is_err());
    }
}
