use std::ffi::OsStr;
use std::path::Path;

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};

use domain::format::ImageFormat;
use pictrim_application::error::AppError;

use crate::incoming::http_axum::error_mapper::HttpError;

pub struct UploadedImage {
    pub file_name: String,
    pub format_hint: ImageFormat,
    pub bytes: Vec<u8>,
}

/// Parsed `/image/trim` form: the required file part plus the optional
/// numeric fields, unvalidated beyond syntax. Range checks happen when the
/// processing config is built.
pub struct TrimForm {
    pub file: UploadedImage,
    pub resize_width: Option<i64>,
    pub resize_height: Option<i64>,
    pub quality: i64,
}

pub async fn extract_trim_form(mut multipart: Multipart) -> Result<TrimForm, HttpError> {
    let mut file = None;
    let mut resize_width = None;
    let mut resize_height = None;
    let mut quality = 0;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some(validate_upload(file_name, content_type.as_deref(), bytes.to_vec())?);
            }
            "resize_width" => {
                resize_width = Some(parse_integer_field(&name, &field_text(field).await?)?);
            }
            "resize_height" => {
                resize_height = Some(parse_integer_field(&name, &field_text(field).await?)?);
            }
            "quality" => {
                quality = parse_integer_field(&name, &field_text(field).await?)?;
            }
            // unknown form fields are ignored
            _ => {}
        }
    }

    let file = file.ok_or_else(|| {
        HttpError(AppError::ValidationError {
            message: "multipart field 'file' is required".to_string(),
        })
    })?;

    Ok(TrimForm {
        file,
        resize_width,
        resize_height,
        quality,
    })
}

fn validate_upload(
    file_name: String,
    content_type: Option<&str>,
    bytes: Vec<u8>,
) -> Result<UploadedImage, HttpError> {
    let is_image = content_type.is_some_and(|ct| ct.starts_with("image/"));
    if !is_image {
        return Err(HttpError(AppError::ValidationError {
            message: "uploaded file must be an image".to_string(),
        }));
    }

    let extension = Path::new(&file_name)
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    let format_hint = ImageFormat::from_extension(extension).map_err(|e| {
        HttpError(AppError::ValidationError {
            message: e.to_string(),
        })
    })?;

    if bytes.is_empty() {
        return Err(HttpError(AppError::ValidationError {
            message: "uploaded file is empty".to_string(),
        }));
    }

    Ok(UploadedImage {
        file_name,
        format_hint,
        bytes,
    })
}

async fn field_text(field: Field<'_>) -> Result<String, HttpError> {
    field.text().await.map_err(multipart_error)
}

fn parse_integer_field(name: &str, raw: &str) -> Result<i64, HttpError> {
    raw.trim().parse::<i64>().map_err(|_| {
        HttpError(AppError::ValidationError {
            message: format!("{name} must be an integer, got '{raw}'"),
        })
    })
}

fn multipart_error(e: MultipartError) -> HttpError {
    HttpError(AppError::ValidationError {
        message: format!("invalid multipart payload: {e}"),
    })
}
