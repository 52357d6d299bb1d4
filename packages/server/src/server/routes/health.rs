use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    generation_model: String,
}

/// Health check endpoint
///
/// The generation service is not contacted; a healthy process can still fall
/// back to unrefined descriptions.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            generation_model: state.refine_options.model.clone(),
        }),
    )
}
