use crate::{dto::CheckResponse, errors::ApiError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_check_domain")]
pub async fn check_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<CheckResponse>, ApiError> {
    debug!(domain = %domain, "readiness check requested");
    let record = state.resolve_domain.execute(&domain).await?;
    Ok(Json(CheckResponse::from(record)))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
