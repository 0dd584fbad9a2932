use axum::{
    Json,
    extract::{Multipart, State},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::debug;

use pictrim_application::ports::incoming::process::ProcessImageUseCase;
use pictrim_application::processing::commands::ProcessingConfig;

use crate::incoming::http_axum::{
    core::extractors::extract_trim_form,
    dto::responses::TrimImageResponse,
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::requests::TrimUploadRequest;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/image/trim",
    request_body(content = TrimUploadRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = TrimImageResponse),
        (status = 400, description = "Input bytes are not a decodable image"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 422, description = "Malformed form field or unsupported file"),
        (status = 500, description = "Processing failed")
    ),
    tag = "image",
    summary = "Trim and optionally resize an image",
    description = "Remove uniform-color border padding from the uploaded image, optionally resize it (exact when both axes are given, aspect-preserving when one is), optionally re-encode it at the requested quality, and return the result base64-encoded. Requires a bearer token.",
    operation_id = "trim_image"
))]
pub async fn trim_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TrimImageResponse>, HttpError> {
    let form = extract_trim_form(multipart).await?;

    debug!(
        file_name = %form.file.file_name,
        format_hint = %form.file.format_hint,
        "Accepted upload"
    );

    // Trim is always on for this route; resize and quality follow the form.
    let config = ProcessingConfig::new(true, form.resize_width, form.resize_height, form.quality)
        .map_err(HttpError)?;

    let process_uc: &dyn ProcessImageUseCase = &*state.process_image_service;
    let output = process_uc
        .process_image(form.file.bytes, config)
        .await
        .map_err(HttpError)?;

    Ok(Json(TrimImageResponse {
        file_format: output.result.file_format,
        img_base64: STANDARD.encode(&output.bytes),
    }))
}
