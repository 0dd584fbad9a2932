use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

/// Closed set of formats the pipeline accepts. Anything else is rejected
/// before decoding is attempted.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    pub fn from_extension(extension: &str) -> DomainResult<Self> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            other => Err(DomainError::UnsupportedFormat(format!(
                "extension '{other}' is not one of png, jpg, jpeg, webp"
            ))),
        }
    }

    /// Lowercase canonical name reported in processing metadata.
    #[must_use]
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

impl FromStr for ImageFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        assert_eq!(ImageFormat::from_extension(".png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("PNG").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension(".jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(
            ImageFormat::from_extension(".WebP").unwrap(),
            ImageFormat::Webp
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert!(ImageFormat::from_extension(".gif").is_err());
        assert!(ImageFormat::from_extension("tiff").is_err());
        assert!(ImageFormat::from_extension("").is_err());
    }

    #[test]
    fn jpg_and_jpeg_share_a_canonical_name() {
        assert_eq!(ImageFormat::from_extension("jpg").unwrap().canonical_name(), "jpeg");
        assert_eq!(ImageFormat::from_extension("jpeg").unwrap().canonical_name(), "jpeg");
    }
}
