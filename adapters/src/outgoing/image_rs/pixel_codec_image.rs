use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{
    DynamicImage, ExtendedColorType, ImageBuffer, ImageEncoder, ImageError,
    ImageFormat as CrateImageFormat, ImageReader, Rgba,
};
use tracing::{debug, instrument};
use webp::Encoder as WebpEncoder;

use domain::{format::ImageFormat, geometry::Dimensions, quality::Quality, raster::Raster};
use pictrim_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_codec::{DecodedImage, ImageCodecPort},
};

/// Codec backed by the `image` crate, plus libwebp for lossy WEBP output.
/// Stateless; every call works on request-owned buffers only.
pub struct ImageRsCodecAdapter;

impl ImageRsCodecAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageRsCodecAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodecPort for ImageRsCodecAdapter {
    #[instrument(skip(self, bytes), fields(input_bytes = bytes.len()))]
    fn decode(&self, bytes: &[u8]) -> AppResult<DecodedImage> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| AppError::DecodeError {
                message: format!("Failed to inspect image bytes: {e}"),
            })?;

        // The container bytes are authoritative; the filename extension was
        // only an admission check.
        let format = match reader.format() {
            Some(CrateImageFormat::Png) => ImageFormat::Png,
            Some(CrateImageFormat::Jpeg) => ImageFormat::Jpeg,
            Some(CrateImageFormat::WebP) => ImageFormat::Webp,
            Some(other) => {
                return Err(AppError::DecodeError {
                    message: format!("Unsupported image format: {other:?}"),
                });
            }
            None => {
                return Err(AppError::DecodeError {
                    message: "Input is not a recognizable image".to_string(),
                });
            }
        };

        let img = reader.decode().map_err(|e| AppError::DecodeError {
            message: format!("Failed to decode image: {e}"),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        let raster = Raster::from_rgba8(rgba.into_raw(), Dimensions::new(width, height))?;

        debug!("Decoded {} {}", format, raster.dimensions());
        Ok(DecodedImage { raster, format })
    }

    #[instrument(skip(self, raster))]
    fn resample(&self, raster: &Raster, target: Dimensions) -> AppResult<Raster> {
        let buffer = to_image_buffer(raster)?;
        let resized = DynamicImage::ImageRgba8(buffer).resize_exact(
            target.width,
            target.height,
            FilterType::Lanczos3,
        );
        let rgba = resized.into_rgba8();
        let raster = Raster::from_rgba8(rgba.into_raw(), target)?;
        Ok(raster)
    }

    #[instrument(skip(self, raster))]
    fn encode(&self, raster: &Raster, format: ImageFormat, quality: Quality) -> AppResult<Vec<u8>> {
        let bytes = match format {
            ImageFormat::Png => encode_png(raster, quality)?,
            ImageFormat::Jpeg => encode_jpeg(raster, quality)?,
            ImageFormat::Webp => encode_webp(raster, quality)?,
        };

        debug!(
            "Encoded {} {} into {} bytes",
            format,
            raster.dimensions(),
            bytes.len()
        );
        Ok(bytes)
    }
}

fn to_image_buffer(raster: &Raster) -> AppResult<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    ImageBuffer::from_raw(raster.width(), raster.height(), raster.as_bytes().to_vec()).ok_or_else(
        || AppError::ProcessingError {
            message: "Pixel buffer does not match its dimensions".to_string(),
        },
    )
}

fn encode_error(e: ImageError) -> AppError {
    AppError::ProcessingError {
        message: format!("Failed to encode image: {e}"),
    }
}

fn encode_png(raster: &Raster, quality: Quality) -> AppResult<Vec<u8>> {
    let mut out = Vec::new();

    if quality.is_default() {
        let buffer = to_image_buffer(raster)?;
        DynamicImage::ImageRgba8(buffer)
            .write_to(&mut Cursor::new(&mut out), CrateImageFormat::Png)
            .map_err(encode_error)?;
    } else {
        let compression = png_compression_type(quality.png_compression_level());
        let encoder = PngEncoder::new_with_quality(
            Cursor::new(&mut out),
            compression,
            PngFilterType::Adaptive,
        );
        encoder
            .write_image(
                raster.as_bytes(),
                raster.width(),
                raster.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(encode_error)?;
    }

    Ok(out)
}

// The 1-9 level keeps its wire meaning in the reported metadata; the png
// backend only distinguishes three effort tiers.
fn png_compression_type(level: u8) -> CompressionType {
    match level {
        1..=3 => CompressionType::Fast,
        4..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}

fn encode_jpeg(raster: &Raster, quality: Quality) -> AppResult<Vec<u8>> {
    // JPEG carries no alpha channel.
    let buffer = to_image_buffer(raster)?;
    let rgb = DynamicImage::ImageRgba8(buffer).into_rgb8();

    let mut out = Vec::new();
    let encoder = if quality.is_default() {
        JpegEncoder::new(Cursor::new(&mut out))
    } else {
        JpegEncoder::new_with_quality(Cursor::new(&mut out), quality.value())
    };
    encoder
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(encode_error)?;

    Ok(out)
}

fn encode_webp(raster: &Raster, quality: Quality) -> AppResult<Vec<u8>> {
    if quality.is_default() {
        let buffer = to_image_buffer(raster)?;
        let mut out = Vec::new();
        DynamicImage::ImageRgba8(buffer)
            .write_to(&mut Cursor::new(&mut out), CrateImageFormat::WebP)
            .map_err(encode_error)?;
        return Ok(out);
    }

    let encoder = WebpEncoder::from_rgba(raster.as_bytes(), raster.width(), raster.height());
    Ok(encoder.encode(f32::from(quality.value())).to_vec())
}
