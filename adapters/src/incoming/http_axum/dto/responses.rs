use serde::Serialize;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

/// Body of a successful trim request: the processed image, base64-encoded,
/// together with its normalized format name.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    example = json!({
        "file_format": "png",
        "img_base64": "iVBORw0KGgoAAAANSUhEUg=="
    })
))]
#[derive(Debug, Clone, Serialize)]
pub struct TrimImageResponse {
    #[cfg_attr(feature = "docs", schema(example = "png"))]
    pub file_format: String,
    #[cfg_attr(feature = "docs", schema(example = "iVBORw0KGgoAAAANSUhEUg=="))]
    pub img_base64: String,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    #[cfg_attr(feature = "docs", schema(example = "PicTrim image processing API"))]
    pub message: String,
    #[cfg_attr(feature = "docs", schema(example = "running"))]
    pub status: String,
    #[cfg_attr(feature = "docs", schema(example = "/docs"))]
    pub docs: String,
}

/// Liveness report with the non-secret parts of the runtime configuration.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    example = json!({
        "ok": true,
        "environment": "development",
        "limits": { "max_upload_bytes": 26_214_400 }
    })
))]
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub environment: String,
    pub limits: UploadLimits,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct UploadLimits {
    #[cfg_attr(feature = "docs", schema(example = 26_214_400))]
    pub max_upload_bytes: usize,
}
