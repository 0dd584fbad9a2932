use utoipa::OpenApi;

use crate::incoming::http_axum::dto::requests::TrimUploadRequest;
use crate::incoming::http_axum::dto::responses::{
    HealthResponse, ServiceInfoResponse, TrimImageResponse, UploadLimits,
};
use crate::incoming::http_axum::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PicTrim image processing API",
        description = "Trim uniform-color borders from uploaded images, optionally resize and re-encode them."
    ),
    paths(
        handlers::trim::trim_image,
        handlers::health::health_check,
        handlers::info::service_info,
    ),
    components(schemas(
        TrimUploadRequest,
        TrimImageResponse,
        ServiceInfoResponse,
        HealthResponse,
        UploadLimits,
    )),
    tags(
        (name = "image", description = "Image trimming, resizing and re-encoding"),
        (name = "system", description = "Service information and health")
    )
)]
pub struct ApiDoc;
