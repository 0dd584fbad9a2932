use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Rectangular subregion of an image retained after trimming. The region is
/// expressed in the source image's coordinate space; cropping re-bases the
/// result at origin (0, 0).
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    #[must_use]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn full(dims: Dimensions) -> Self {
        Self::new(0, 0, dims.width, dims.height)
    }

    #[must_use]
    pub fn is_full(&self, dims: Dimensions) -> bool {
        self.x == 0 && self.y == 0 && self.width == dims.width && self.height == dims.height
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn validate_within(&self, dims: Dimensions) -> DomainResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DomainError::InvalidCropRegion(format!(
                "region {}x{} has no area",
                self.width, self.height
            )));
        }

        let fits_horizontally = self
            .x
            .checked_add(self.width)
            .is_some_and(|right| right <= dims.width);
        let fits_vertically = self
            .y
            .checked_add(self.height)
            .is_some_and(|bottom| bottom <= dims.height);

        if !fits_horizontally || !fits_vertically {
            return Err(DomainError::InvalidCropRegion(format!(
                "region {}+{}x{}+{} exceeds image bounds {dims}",
                self.x, self.width, self.y, self.height
            )));
        }

        Ok(())
    }
}

impl fmt::Display for CropRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn full_region_covers_the_image() {
        let dims = Dimensions::new(200, 100);
        let region = CropRegion::full(dims);
        assert!(region.is_full(dims));
        assert!(region.validate_within(dims).is_ok());
        assert_eq!(region.dimensions(), dims);
    }

    #[test]
    fn region_must_stay_inside_the_image() {
        let dims = Dimensions::new(10, 10);
        assert!(CropRegion::new(5, 0, 6, 10).validate_within(dims).is_err());
        assert!(CropRegion::new(0, 5, 10, 6).validate_within(dims).is_err());
        assert!(CropRegion::new(2, 2, 8, 8).validate_within(dims).is_ok());
    }

    #[test]
    fn zero_area_region_is_invalid() {
        let dims = Dimensions::new(10, 10);
        assert!(CropRegion::new(0, 0, 0, 10).validate_within(dims).is_err());
        assert!(CropRegion::new(0, 0, 10, 0).validate_within(dims).is_err());
    }

    #[test]
    fn overflow_near_u32_max_is_rejected() {
        let dims = Dimensions::new(u32::MAX, 1);
        assert!(
            CropRegion::new(u32::MAX, 0, 2, 1)
                .validate_within(dims)
                .is_err()
        );
    }
}
