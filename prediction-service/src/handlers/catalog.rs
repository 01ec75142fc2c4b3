//! Read-only dropdown data derived from the reference dataset.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::startup::AppState;

pub async fn companies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.companies())
}

pub async fn models_for_company(
    State(state): State<AppState>,
    Path(company): Path<String>,
) -> Json<Vec<String>> {
    Json(state.dataset.models_for(&company))
}

pub async fn years(State(state): State<AppState>) -> Json<Vec<i64>> {
    Json(state.dataset.years())
}

pub async fn fuel_types(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.fuel_types())
}
