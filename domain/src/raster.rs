use crate::color::Rgba;
use crate::error::{DomainError, DomainResult};
use crate::geometry::{CropRegion, Dimensions};

pub const BYTES_PER_PIXEL: usize = 4;

/// Owned RGBA8 pixel buffer, row-major, origin at the top-left corner.
/// Exactly one raster exists per request; it is consumed by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    data: Vec<u8>,
    dims: Dimensions,
}

impl Raster {
    pub fn from_rgba8(data: Vec<u8>, dims: Dimensions) -> DomainResult<Self> {
        let expected = dims.width as usize * dims.height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(DomainError::InvalidBuffer(format!(
                "expected {expected} bytes for {dims}, got {}",
                data.len()
            )));
        }
        Ok(Self { data, dims })
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        let offset = (y as usize * self.dims.width as usize + x as usize) * BYTES_PER_PIXEL;
        let channels = self.data.get(offset..offset + BYTES_PER_PIXEL)?;
        match channels {
            [r, g, b, a] => Some(Rgba::new(*r, *g, *b, *a)),
            _ => None,
        }
    }

    /// Copies the region into a fresh buffer re-based at origin (0, 0); the
    /// result keeps no memory of its pre-crop position.
    pub fn crop(&self, region: &CropRegion) -> DomainResult<Self> {
        region.validate_within(self.dims)?;

        if region.is_full(self.dims) {
            return Ok(self.clone());
        }

        let row_width = self.dims.width as usize;
        let region_width_bytes = region.width as usize * BYTES_PER_PIXEL;
        let mut data = Vec::with_capacity(region.height as usize * region_width_bytes);

        for y in region.y..region.y + region.height {
            let row_start = (y as usize * row_width + region.x as usize) * BYTES_PER_PIXEL;
            let row = self
                .data
                .get(row_start..row_start + region_width_bytes)
                .ok_or_else(|| {
                    DomainError::InvalidBuffer(format!("row {y} out of bounds for {}", self.dims))
                })?;
            data.extend_from_slice(row);
        }

        Self::from_rgba8(data, region.dimensions())
    }
}
