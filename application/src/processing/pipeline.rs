use tracing::debug;

use domain::{resize, trim};

use crate::error::AppResult;
use crate::ports::outgoing::image_codec::DynImageCodecPort;

use super::commands::{CompressionApplied, PipelineOutput, ProcessingConfig, ProcessingResult};

/// Decode -> trim -> resize -> encode, strictly in that order. Trim and
/// resize are identity stages unless requested; decode and encode always
/// run. Any stage failure aborts the run, so partial output never escapes.
pub struct Pipeline {
    codec_port: DynImageCodecPort,
}

impl Pipeline {
    #[must_use]
    pub fn new(codec_port: DynImageCodecPort) -> Self {
        Self { codec_port }
    }

    pub fn run(&self, source: &[u8], config: &ProcessingConfig) -> AppResult<PipelineOutput> {
        let decoded = self.codec_port.decode(source)?;
        let format = decoded.format;
        let mut raster = decoded.raster;

        if config.trim {
            let region = trim::content_region(&raster);
            if region.is_full(raster.dimensions()) {
                debug!("No trimmable border found, keeping {}", raster.dimensions());
            } else {
                debug!("Trimming {} down to {}", raster.dimensions(), region);
                raster = raster.crop(&region)?;
            }
        }

        if config.wants_resize() {
            let target = resize::scaled_dimensions(
                raster.dimensions(),
                config.resize_width,
                config.resize_height,
            );
            if target != raster.dimensions() {
                debug!("Resampling {} to {}", raster.dimensions(), target);
                raster = self.codec_port.resample(&raster, target)?;
            }
        }

        let dims = raster.dimensions();
        let bytes = self.codec_port.encode(&raster, format, config.quality)?;
        let result = ProcessingResult {
            file_format: format.canonical_name().to_string(),
            width: dims.width,
            height: dims.height,
            compression: CompressionApplied::for_format(format, config.quality),
            file_size_bytes: bytes.len(),
        };

        Ok(PipelineOutput { bytes, result })
    }
}
