//! Request body for the prediction endpoint and its boundary validation.

use crate::models::FeatureRecord;
use serde::Deserialize;
use serde_json::Value;
use service_core::error::AppError;

/// Raw prediction request. Fields are captured as raw JSON so that absence,
/// null and wrong-typed values can each be reported precisely.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub company: Option<Value>,
    pub car_models: Option<Value>,
    pub year: Option<Value>,
    pub fuel_type: Option<Value>,
    pub kilo_driven: Option<Value>,
}

impl PredictRequest {
    /// Validate all five required fields and produce the typed feature
    /// record in the trained column order.
    pub fn into_feature_record(self) -> Result<FeatureRecord, AppError> {
        let company = require_string("company", self.company)?;
        let name = require_string("car_models", self.car_models)?;
        let year = require_integer("year", self.year)?;
        let fuel_type = require_string("fuel_type", self.fuel_type)?;
        let kms_driven = require_integer("kilo_driven", self.kilo_driven)?;

        Ok(FeatureRecord {
            name,
            company,
            year,
            kms_driven,
            fuel_type,
        })
    }
}

fn require_string(field: &str, value: Option<Value>) -> Result<String, AppError> {
    match value {
        None | Some(Value::Null) => Err(AppError::MissingField(field.to_string())),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(AppError::InvalidField {
            field: field.to_string(),
            expected: "a string".to_string(),
        }),
    }
}

/// Accepts JSON integers and integer strings; the original clients send both.
fn require_integer(field: &str, value: Option<Value>) -> Result<i64, AppError> {
    let invalid = || AppError::InvalidField {
        field: field.to_string(),
        expected: "an integer".to_string(),
    };

    match value {
        None | Some(Value::Null) => Err(AppError::MissingField(field.to_string())),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(invalid),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
