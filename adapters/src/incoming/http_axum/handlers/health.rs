use axum::{Json, extract::State};

use crate::incoming::http_axum::dto::responses::{HealthResponse, UploadLimits};
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "system",
    summary = "System health check",
    description = "Report that the service is up, along with the non-secret parts of its runtime configuration.",
    operation_id = "health_check"
))]
#[allow(clippy::unused_async)] // axum handlers are async by contract
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        environment: state.config.environment.env.clone(),
        limits: UploadLimits {
            max_upload_bytes: state.config.upload.max_upload_bytes,
        },
    })
}
