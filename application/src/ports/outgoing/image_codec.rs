use std::sync::Arc;

use domain::{format::ImageFormat, geometry::Dimensions, quality::Quality, raster::Raster};

use crate::error::AppResult;

#[derive(Debug)]
pub struct DecodedImage {
    pub raster: Raster,
    pub format: ImageFormat,
}

pub trait ImageCodecPort: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> AppResult<DecodedImage>;
    fn resample(&self, raster: &Raster, target: Dimensions) -> AppResult<Raster>;
    fn encode(&self, raster: &Raster, format: ImageFormat, quality: Quality) -> AppResult<Vec<u8>>;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
