use axum::Json;

use crate::incoming::http_axum::dto::responses::ServiceInfoResponse;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, body = ServiceInfoResponse)
    ),
    tag = "system",
    summary = "Service banner",
    operation_id = "service_info"
))]
#[allow(clippy::unused_async)] // axum handlers are async by contract
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "PicTrim image processing API".to_string(),
        status: "running".to_string(),
        docs: "/docs".to_string(),
    })
}
