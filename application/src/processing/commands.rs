use std::num::NonZeroU32;

use serde::Serialize;

use domain::{format::ImageFormat, quality::Quality};

use crate::error::{AppError, AppResult};

/// Immutable description of one processing request, built from validated
/// caller input before the pipeline runs.
#[derive(Debug, Clone, Copy)]
pub struct ProcessingConfig {
    pub trim: bool,
    pub resize_width: Option<NonZeroU32>,
    pub resize_height: Option<NonZeroU32>,
    pub quality: Quality,
}

impl ProcessingConfig {
    pub fn new(
        trim: bool,
        resize_width: Option<i64>,
        resize_height: Option<i64>,
        quality: i64,
    ) -> AppResult<Self> {
        Ok(Self {
            trim,
            resize_width: validate_axis("resize_width", resize_width)?,
            resize_height: validate_axis("resize_height", resize_height)?,
            quality: Quality::parse(quality).map_err(|e| AppError::ValidationError {
                message: e.to_string(),
            })?,
        })
    }

    #[must_use]
    pub fn wants_resize(&self) -> bool {
        self.resize_width.is_some() || self.resize_height.is_some()
    }
}

fn validate_axis(field: &str, value: Option<i64>) -> AppResult<Option<NonZeroU32>> {
    let Some(value) = value else {
        return Ok(None);
    };
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .map(Some)
        .ok_or_else(|| AppError::ValidationError {
            message: format!("{field} must be a positive integer, got {value}"),
        })
}

/// Encoder setting that was actually applied, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionApplied {
    /// JPEG/WEBP quality on the 1-100 scale.
    Quality(u8),
    /// PNG compression level on the 1-9 scale.
    PngLevel(u8),
}

impl CompressionApplied {
    /// None when quality is 0: the encoder keeps its format default and no
    /// descriptor is reported.
    #[must_use]
    pub fn for_format(format: ImageFormat, quality: Quality) -> Option<Self> {
        if quality.is_default() {
            return None;
        }
        match format {
            ImageFormat::Jpeg | ImageFormat::Webp => Some(Self::Quality(quality.value())),
            ImageFormat::Png => Some(Self::PngLevel(quality.png_compression_level())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    pub file_format: String,
    pub width: u32,
    pub height: u32,
    pub compression: Option<CompressionApplied>,
    pub file_size_bytes: usize,
}

/// Terminal artifact of one request: encoded bytes plus derived metadata.
#[derive(Debug)]
pub struct PipelineOutput {
    pub bytes: Vec<u8>,
    pub result: ProcessingResult,
}
