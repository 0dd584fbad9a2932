use crate::geometry::CropRegion;
use crate::raster::Raster;

/// Fraction of the full channel range still considered background when
/// scanning for trimmable borders.
pub const FUZZ_PERCENT: u32 = 5;

// Squared RGBA distance corresponding to FUZZ_PERCENT of the 8-bit range:
// (255 * 5 / 100)^2 summed over four channels.
const FUZZ_THRESHOLD_SQUARED: u32 =
    (255 * FUZZ_PERCENT) * (255 * FUZZ_PERCENT) * 4 / (100 * 100);

/// Minimal bounding box of the pixels that differ from the background by
/// more than the fuzz threshold. The background color is sampled at the
/// top-left corner pixel; this convention is load-bearing and must not be
/// swapped for a corner average or histogram.
///
/// An image that is background throughout yields the full-image region, so
/// callers treat "nothing to trim" as an identity crop rather than an error.
#[must_use]
pub fn content_region(raster: &Raster) -> CropRegion {
    let dims = raster.dimensions();
    let Some(background) = raster.pixel(0, 0) else {
        return CropRegion::full(dims);
    };

    let is_content = |x: u32, y: u32| {
        raster
            .pixel(x, y)
            .is_some_and(|p| p.distance_squared(&background) > FUZZ_THRESHOLD_SQUARED)
    };
    let row_has_content = |y: u32| (0..dims.width).any(|x| is_content(x, y));
    let column_has_content = |x: u32| (0..dims.height).any(|y| is_content(x, y));

    let Some(top) = (0..dims.height).find(|&y| row_has_content(y)) else {
        return CropRegion::full(dims);
    };

    // Content exists, so the remaining edge scans are guaranteed to hit it.
    let bottom = (0..dims.height)
        .rev()
        .find(|&y| row_has_content(y))
        .unwrap_or(top);
    let left = (0..dims.width).find(|&x| column_has_content(x)).unwrap_or(0);
    let right = (0..dims.width)
        .rev()
        .find(|&x| column_has_content(x))
        .unwrap_or(left);

    CropRegion::new(left, top, right - left + 1, bottom - top + 1)
}
