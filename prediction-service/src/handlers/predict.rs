use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::dtos::PredictRequest;
use crate::services::metrics::record_prediction;
use crate::services::model::round2;
use crate::startup::AppState;
use service_core::error::AppError;

/// POST /predict: validate the five required fields, build the feature
/// record in the trained column order, run inference and return the price
/// rounded to two decimals as a bare JSON number.
#[tracing::instrument(skip(state, payload))]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<f64>, AppError> {
    // A body that does not parse at all is not a field validation error;
    // the cause is logged server-side and the client gets a generic 500.
    let Json(request) = payload.map_err(|e| {
        record_prediction("malformed");
        AppError::InternalError(anyhow::anyhow!("Malformed request payload: {}", e))
    })?;

    let record = request.into_feature_record().inspect_err(|_| {
        record_prediction("invalid");
    })?;

    let price = state.model.predict(&record).inspect_err(|_| {
        record_prediction("inference_error");
    })?;

    record_prediction("ok");
    Ok(Json(round2(price)))
}
