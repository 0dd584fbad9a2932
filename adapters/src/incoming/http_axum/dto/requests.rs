use serde::Deserialize;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

/// Shape of the multipart form accepted by the trim endpoint. The handler
/// reads the parts manually; this type exists for the generated API schema.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct TrimUploadRequest {
    /// Image file to process (.png, .jpg, .jpeg or .webp).
    #[cfg_attr(feature = "docs", schema(value_type = String, format = Binary))]
    pub file: String,
    /// Target width; height is derived when it is the only axis given.
    #[cfg_attr(feature = "docs", schema(example = 800, minimum = 1))]
    pub resize_width: Option<u32>,
    /// Target height; width is derived when it is the only axis given.
    #[cfg_attr(feature = "docs", schema(example = 600, minimum = 1))]
    pub resize_height: Option<u32>,
    /// Output quality 0-100; 0 keeps the encoder's format default.
    #[cfg_attr(feature = "docs", schema(example = 80, minimum = 0, maximum = 100))]
    pub quality: Option<u8>,
}
